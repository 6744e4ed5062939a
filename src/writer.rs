//! CSV 출력 모듈
//!
//! 수집된 `Dataset`을 `label;text` 헤더를 가진 세미콜론 구분 파일로 씁니다.
//! 구분자, 따옴표, 줄바꿈이 들어간 필드는 따옴표로 감싸고 내부 따옴표는 두 번 씁니다.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::collector::Dataset;
use crate::config::{DELIMITER, HEADER};
use crate::error::{CorpusError, Result};

/// 임의의 writer로 데이터셋 직렬화
///
/// 데이터셋이 비어 있어도 헤더 행은 항상 씁니다.
pub fn write_to<W: Write>(dataset: &Dataset, out: W, path: &Path) -> Result<()> {
    let write_error = |reason: String| CorpusError::WriteError {
        path: path.to_path_buf(),
        reason,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer
        .write_record(HEADER)
        .map_err(|e| write_error(e.to_string()))?;

    for record in dataset {
        writer
            .serialize(record)
            .map_err(|e| write_error(e.to_string()))?;
    }

    writer.flush().map_err(|e| write_error(e.to_string()))
}

/// 출력 파일에 데이터셋 쓰기
///
/// 기존 파일은 덮어씁니다. 쓴 바이트 수를 반환합니다.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<u64> {
    let file = File::create(path).map_err(|e| CorpusError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    write_to(dataset, file, path)?;

    let written = std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| CorpusError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(written)
}
