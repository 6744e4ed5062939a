//! 에러 타입 정의 모듈
//!
//! corpus2csv에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 어떤 에러든 발생하는 즉시 전체 실행이 중단됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// corpus2csv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum CorpusError {
    /// 입력 루트 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 폴더여야 할 경로가 폴더가 아님 (루트 또는 라벨)
    #[error("경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 라벨 폴더 안의 항목이 일반 파일이 아님
    #[error("문서 경로가 파일이 아닙니다: {path}")]
    NotAFile { path: PathBuf },

    /// 라벨 이름을 UTF-8 문자열로 표현할 수 없음
    #[error("유효하지 않은 라벨 이름: {path}")]
    InvalidLabel { path: PathBuf },

    /// 폴더 탐색 실패
    #[error("폴더 탐색 실패 ({path}): {reason}")]
    Walk { path: PathBuf, reason: String },

    /// 문서 파일 열기/읽기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// UTF-8 디코딩 실패
    #[error("UTF-8 디코딩 실패 ({file}): {reason}")]
    DecodeError { file: PathBuf, reason: String },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {reason}")]
    WriteError { path: PathBuf, reason: String },
}

/// corpus2csv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let error = CorpusError::DecodeError {
            file: PathBuf::from("sci.space/1234"),
            reason: "invalid utf-8 sequence".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("UTF-8 디코딩 실패"));
        assert!(msg.contains("sci.space/1234"));
    }
}
