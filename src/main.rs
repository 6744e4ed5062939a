//! corpus2csv - LABELED CORPUS TO CSV
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use corpus2csv::{cli::Args, collector, config::Config, pipeline};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config();

    // 입력 폴더 확인
    collector::validate_root(&config.input_root)
        .with_context(|| format!("입력 폴더 확인 실패: {:?}", config.input_root))?;

    // 헤더 출력
    print_header(&args, &config);

    // 드라이런 모드
    if args.dry_run {
        return run_dry_run(&config);
    }

    // 수집 + 쓰기
    println!("\n{}", "📁 문서 수집 중...".bright_cyan());
    let pb = create_progress_bar()?;
    let result = pipeline::run(&config, &pb);

    // 성공/실패와 관계없이 진행률 바 정리
    finish_progress_bar(&pb, result.is_ok());
    let stats = result.with_context(|| format!("변환 실패: {:?}", config.input_root))?;

    if args.verbose {
        stats.print_labels();
    }

    // 통계 출력
    stats.print_summary();

    println!(
        "\n{} 저장 완료: {:?}\n",
        "✅".bright_green(),
        config.output_path
    );

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, config: &Config) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 LABELED CORPUS TO CSV".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), config.input_root);

    if !args.dry_run {
        println!("  {} 출력 파일: {:?}", "📄".bright_green(), config.output_path);
    }

    if config.sorted {
        println!("  {} {}", "🔤".bright_white(), "파일 이름 순 정렬".white());
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 드라이런: 라벨별 문서 수만 출력
fn run_dry_run(config: &Config) -> Result<()> {
    let layout = collector::scan(config)?;
    let total: usize = layout.iter().map(|(_, documents)| documents.len()).sum();

    println!("\n{}", "📋 변환 예정 라벨 목록:".bright_cyan());
    for (i, (label, documents)) in layout.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, label.name, documents.len());
    }
    println!(
        "\n{} 라벨 {} 개, 문서 {} 개가 변환될 예정입니다.",
        "ℹ️".bright_blue(),
        layout.len().to_string().bright_green(),
        total.to_string().bright_green()
    );

    Ok(())
}

/// 진행률 바 생성 (길이는 라벨 목록을 읽은 뒤 정해짐)
fn create_progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} 라벨 ({percent}%) {msg}")
            .context("진행률 바 템플릿 오류")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// 진행률 바 정리 (실패 시에는 현재 위치를 남겨 둠)
fn finish_progress_bar(pb: &ProgressBar, success: bool) {
    if success {
        pb.finish_and_clear();
    } else {
        pb.abandon_with_message("중단됨");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_progress_bar() {
        let pb = create_progress_bar().unwrap();
        assert_eq!(pb.position(), 0);
    }

    #[test]
    fn test_progress_bar_finished_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new()
            .with_input_root(temp_dir.path().join("missing"))
            .with_output_path(temp_dir.path().join("out.csv"));

        let pb = ProgressBar::hidden();
        let result = pipeline::run(&config, &pb);
        finish_progress_bar(&pb, result.is_ok());

        assert!(result.is_err());
        assert!(pb.is_finished());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("raw");
        fs::create_dir_all(input.join("a")).unwrap();
        fs::write(input.join("a").join("1"), "doc").unwrap();
        let output = temp_dir.path().join("out.csv");

        let config = Config::new()
            .with_input_root(&input)
            .with_output_path(&output);
        run_dry_run(&config).unwrap();

        assert!(!output.exists());
    }
}
