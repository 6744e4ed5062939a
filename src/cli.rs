//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_INPUT_ROOT, DEFAULT_OUTPUT_PATH};

/// corpus2csv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "corpus2csv",
    author = "YourName <your@email.com>",
    version,
    about = "LABELED CORPUS TO CSV - 라벨별 폴더의 텍스트 문서를 하나의 CSV로 평탄화하는 CLI 도구",
    long_about = r#"
LABELED CORPUS TO CSV
=====================

입력 폴더 바로 아래의 각 하위 폴더를 하나의 라벨로 보고,
그 안의 모든 파일을 문서 하나씩 읽어
`label;text` 형식의 세미콜론 구분 CSV 파일로 저장합니다.

특징:
  • 인자 없이 실행하면 ./data/raw → 20newsgroup_raw.csv
  • 라벨 단위 진행률 표시
  • 세미콜론/줄바꿈/따옴표가 든 본문은 자동으로 따옴표 처리
  • 읽을 수 없는 파일이 하나라도 있으면 즉시 중단

예제:
  corpus2csv
  corpus2csv -i ./data/raw -o dataset.csv
  corpus2csv -i ./data/raw --sorted --verbose
  corpus2csv -i ./data/raw --dry-run
"#
)]
pub struct Args {
    /// 라벨별 하위 폴더가 있는 입력 폴더 경로
    #[arg(short, long, default_value = DEFAULT_INPUT_ROOT)]
    pub input: PathBuf,

    /// 생성될 CSV 파일 경로 (기존 파일은 덮어씀)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// 라벨과 문서를 파일 이름 순으로 정렬 (기본: 폴더 목록 순서)
    #[arg(long)]
    pub sorted: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 라벨별 문서 수만 표시
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// 실행 설정으로 변환
    pub fn to_config(&self) -> Config {
        Config::new()
            .with_input_root(&self.input)
            .with_output_path(&self.output)
            .with_sorted(self.sorted)
    }
}
