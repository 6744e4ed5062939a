//! 수집 → 쓰기 2단계 실행

use indicatif::ProgressBar;

use crate::collector::collect;
use crate::config::Config;
use crate::error::Result;
use crate::stats::Statistics;
use crate::writer::write_dataset;

/// 코퍼스를 모두 수집한 뒤 한 번에 CSV로 씁니다.
///
/// 수집 단계에서 실패하면 출력 파일은 만들어지지도, 건드려지지도 않습니다.
/// 전체 데이터셋을 메모리에 올린 뒤 쓰므로 메모리 사용량은 코퍼스 크기에 비례합니다.
/// 진행률 바를 끝내는 것은 호출하는 쪽의 몫입니다.
pub fn run(config: &Config, progress: &ProgressBar) -> Result<Statistics> {
    let mut stats = Statistics::new();

    let dataset = collect(config, progress)?;
    stats.record_dataset(&dataset);

    let written = write_dataset(&dataset, &config.output_path)?;
    stats.set_bytes_written(written);

    Ok(stats)
}
