//! 실행 설정 모듈
//!
//! 입력 루트, 출력 경로 등 한 번의 실행에 필요한 값을 담습니다.
//! 기본값은 인자 없이 실행했을 때의 고정 동작과 동일합니다.

use std::path::PathBuf;

/// 기본 입력 루트 폴더
pub const DEFAULT_INPUT_ROOT: &str = "./data/raw";

/// 기본 출력 파일 (현재 작업 폴더 기준)
pub const DEFAULT_OUTPUT_PATH: &str = "20newsgroup_raw.csv";

/// 필드 구분자
pub const DELIMITER: u8 = b';';

/// 헤더 행의 필드 이름
pub const HEADER: [&str; 2] = ["label", "text"];

/// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
pub const DEFAULT_MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// 실행 설정
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 라벨별 하위 폴더를 담은 루트 폴더
    pub input_root: PathBuf,
    /// 생성될 CSV 파일 경로
    pub output_path: PathBuf,
    /// 파일 이름 순 정렬 여부 (false면 폴더 목록 순서 그대로)
    pub sorted: bool,
    /// 이 크기 이상인 문서는 메모리 매핑으로 읽음
    pub mmap_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(DEFAULT_INPUT_ROOT),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sorted: false,
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
        }
    }
}

impl Config {
    /// 기본 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 입력 루트 설정
    pub fn with_input_root(mut self, input_root: impl Into<PathBuf>) -> Self {
        self.input_root = input_root.into();
        self
    }

    /// 출력 경로 설정
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// 정렬 여부 설정
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, mmap_threshold: u64) -> Self {
        self.mmap_threshold = mmap_threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_constants() {
        let config = Config::default();
        assert_eq!(config.input_root, PathBuf::from("./data/raw"));
        assert_eq!(config.output_path, PathBuf::from("20newsgroup_raw.csv"));
        assert!(!config.sorted);
        assert_eq!(config.mmap_threshold, 10 * 1024 * 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_input_root("/tmp/corpus")
            .with_output_path("out.csv")
            .with_sorted(true)
            .with_mmap_threshold(0);

        assert_eq!(config.input_root, PathBuf::from("/tmp/corpus"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert!(config.sorted);
        assert_eq!(config.mmap_threshold, 0);
    }
}
