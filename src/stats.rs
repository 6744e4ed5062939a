//! 통계 및 유틸리티 모듈
//!
//! 실행 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::collector::Dataset;

/// 실행 통계 구조체
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    /// 라벨 수 (문서가 없는 라벨 포함)
    pub label_count: usize,
    /// 레코드(문서) 수
    pub record_count: usize,
    /// 문서가 하나도 없는 라벨 수
    pub empty_labels: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 라벨별 문서 수 (라벨 순서 유지)
    pub per_label: Vec<(String, usize)>,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 수집된 데이터셋으로부터 카운트 기록
    pub fn record_dataset(&mut self, dataset: &Dataset) {
        self.per_label = dataset.label_counts().to_vec();
        self.label_count = self.per_label.len();
        self.record_count = dataset.len();
        self.empty_labels = self.per_label.iter().filter(|(_, n)| *n == 0).count();
        self.bytes_read = dataset.total_text_bytes();
    }

    pub fn set_bytes_written(&mut self, bytes: u64) {
        self.bytes_written = bytes;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 라벨별 문서 수 출력
    pub fn print_labels(&self) {
        println!("\n{}", "🏷️ 라벨별 문서 수:".bright_cyan());
        for (label, count) in &self.per_label {
            if *count == 0 {
                println!("  {} {} ({})", "•".yellow(), label, "0".yellow());
            } else {
                println!("  {} {} ({})", "•".green(), label, count);
            }
        }
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 라벨 수:      {}",
            "🏷️".bright_cyan(),
            self.label_count
        );
        println!(
            "  {} 문서 수:      {}",
            "📄".bright_green(),
            self.record_count.to_string().green()
        );

        if self.empty_labels > 0 {
            println!(
                "  {} 빈 라벨:      {}",
                "⚠️".bright_yellow(),
                self.empty_labels.to_string().yellow()
            );
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use corpus2csv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        format!("{}시간 {}분", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
