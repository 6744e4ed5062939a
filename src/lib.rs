//! corpus2csv - LABELED CORPUS TO CSV
//!
//! 라벨별 하위 폴더에 담긴 텍스트 문서들을 `label;text` 형식의
//! 세미콜론 구분 CSV 파일 하나로 평탄화하는 CLI 도구입니다.
//!
//! # 동작
//!
//! 1. **수집**: 입력 루트 바로 아래의 각 폴더를 라벨로 보고, 그 안의 모든 파일을
//!    UTF-8 텍스트로 읽어 `{label, text}` 레코드로 메모리에 쌓습니다.
//! 2. **쓰기**: 수집이 끝나면 헤더와 함께 한 번에 CSV로 씁니다 (기존 파일 덮어씀).
//!
//! 어느 단계든 첫 에러에서 전체 실행이 중단됩니다.
//!
//! # 예제
//!
//! ```bash
//! # 기본 경로 (./data/raw → 20newsgroup_raw.csv)
//! corpus2csv
//!
//! # 경로 지정 + 정렬
//! corpus2csv -i ./corpus -o dataset.csv --sorted
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stats;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use collector::{collect, list_documents, list_labels, read_document, Dataset, LabelDir, Record};
pub use config::Config;
pub use error::{CorpusError, Result};
pub use pipeline::run;
pub use stats::{format_bytes, Statistics};
pub use writer::{write_dataset, write_to};
