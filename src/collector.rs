//! 문서 수집 모듈
//!
//! 입력 루트 아래의 라벨 폴더를 순회하며 각 문서 파일을 읽어
//! `{label, text}` 레코드 목록(`Dataset`)을 만듭니다.

use indicatif::ProgressBar;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CorpusError, Result};

/// 문서 하나에 해당하는 레코드
///
/// 필드 순서가 곧 CSV 열 순서입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 문서가 들어 있던 라벨 폴더 이름
    pub label: String,
    /// 문서 파일의 전체 내용
    pub text: String,
}

impl Record {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// 수집된 레코드 목록 (삽입 순서 유지)
///
/// 라벨별 문서 수는 레코드를 추가할 때 함께 갱신됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    /// 라벨별 문서 수 (처음 등장한 순서)
    label_counts: Vec<(String, usize)>,
    /// 라벨 → `label_counts` 위치
    label_index: HashMap<String, usize>,
}

impl Dataset {
    /// 빈 데이터셋 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 라벨의 `label_counts` 위치 (없으면 새로 등록)
    fn label_slot(&mut self, label: &str) -> usize {
        match self.label_index.entry(label.to_string()) {
            Entry::Occupied(slot) => *slot.get(),
            Entry::Vacant(slot) => {
                let index = self.label_counts.len();
                self.label_counts.push((slot.key().clone(), 0));
                slot.insert(index);
                index
            }
        }
    }

    /// 라벨 등록 (문서가 없는 라벨도 포함)
    pub fn add_label(&mut self, label: &str) {
        self.label_slot(label);
    }

    /// 레코드 추가
    pub fn push(&mut self, record: Record) {
        let index = self.label_slot(&record.label);
        self.label_counts[index].1 += 1;
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// 등록된 라벨 목록 (처음 등장한 순서)
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.label_counts.iter().map(|(label, _)| label.as_str())
    }

    /// 라벨별 문서 수 (처음 등장한 순서)
    pub fn label_counts(&self) -> &[(String, usize)] {
        &self.label_counts
    }

    /// 특정 라벨의 레코드 수
    pub fn count_for(&self, label: &str) -> usize {
        self.label_index
            .get(label)
            .map(|&index| self.label_counts[index].1)
            .unwrap_or(0)
    }

    /// 모든 문서 본문의 총 바이트 수
    pub fn total_text_bytes(&self) -> u64 {
        self.records.iter().map(|r| r.text.len() as u64).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 라벨 폴더
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDir {
    pub name: String,
    pub path: PathBuf,
}

/// 폴더 바로 아래 항목만 순회하는 walker
fn immediate_entries(dir: &Path, sorted: bool) -> WalkDir {
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
    if sorted {
        walker.sort_by_file_name()
    } else {
        walker
    }
}

fn walk_error(dir: &Path, e: walkdir::Error) -> CorpusError {
    CorpusError::Walk {
        path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
        reason: e.to_string(),
    }
}

/// 입력 루트 유효성 검사
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(CorpusError::InputNotFound {
            path: root.to_path_buf(),
        });
    }

    if !root.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    Ok(())
}

/// 루트 바로 아래의 라벨 폴더 목록
///
/// 루트 바로 아래에 폴더가 아닌 항목이 하나라도 있으면 실패합니다.
/// `sorted`가 false면 플랫폼의 폴더 목록 순서를 그대로 따릅니다.
pub fn list_labels(root: &Path, sorted: bool) -> Result<Vec<LabelDir>> {
    validate_root(root)?;

    let mut labels = Vec::new();
    for entry in immediate_entries(root, sorted) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let path = entry.path().to_path_buf();

        if !entry.file_type().is_dir() {
            return Err(CorpusError::NotADirectory { path });
        }

        let name = entry
            .file_name()
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| CorpusError::InvalidLabel { path: path.clone() })?;

        labels.push(LabelDir { name, path });
    }

    Ok(labels)
}

/// 라벨 폴더 안의 문서 파일 목록
pub fn list_documents(label_dir: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in immediate_entries(label_dir, sorted) {
        let entry = entry.map_err(|e| walk_error(label_dir, e))?;

        if !entry.file_type().is_file() {
            return Err(CorpusError::NotAFile {
                path: entry.path().to_path_buf(),
            });
        }

        documents.push(entry.into_path());
    }

    Ok(documents)
}

/// 문서 파일 전체를 UTF-8 문자열로 읽기
///
/// # Arguments
/// * `path` - 문서 파일 경로
/// * `mmap_threshold` - 이 크기 이상이면 메모리 매핑 사용
///
/// 파일 핸들은 이 함수 안에서 닫힙니다.
pub fn read_document(path: &Path, mmap_threshold: u64) -> Result<String> {
    let file = File::open(path).map_err(|e| CorpusError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file_size = file
        .metadata()
        .map(|m| m.len())
        .map_err(|e| CorpusError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 빈 파일은 매핑할 수 없으므로 항상 리더 사용
    if file_size > 0 && file_size >= mmap_threshold {
        read_with_mmap(path, &file)
    } else {
        read_with_reader(path, file, file_size)
    }
}

/// 버퍼 리더를 사용한 읽기
fn read_with_reader(path: &Path, file: File, file_size: u64) -> Result<String> {
    let mut bytes = Vec::with_capacity(usize::try_from(file_size).unwrap_or(0));
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| CorpusError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| CorpusError::DecodeError {
        file: path.to_path_buf(),
        reason: e.utf8_error().to_string(),
    })
}

/// 메모리 매핑을 사용한 읽기 (대용량 파일용)
fn read_with_mmap(path: &Path, file: &File) -> Result<String> {
    let mmap = unsafe {
        Mmap::map(file).map_err(|e| CorpusError::FileOpenError {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    std::str::from_utf8(&mmap)
        .map(str::to_owned)
        .map_err(|e| CorpusError::DecodeError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// 전체 코퍼스 수집
///
/// 라벨 하나를 끝낼 때마다 `progress`를 1 증가시킵니다.
/// 첫 에러에서 즉시 중단하며 부분 결과는 반환하지 않습니다.
pub fn collect(config: &Config, progress: &ProgressBar) -> Result<Dataset> {
    let labels = list_labels(&config.input_root, config.sorted)?;
    progress.set_length(labels.len() as u64);

    let mut dataset = Dataset::new();
    for label in &labels {
        progress.set_message(label.name.clone());
        dataset.add_label(&label.name);

        for path in list_documents(&label.path, config.sorted)? {
            let text = read_document(&path, config.mmap_threshold)?;
            dataset.push(Record::new(label.name.clone(), text));
        }

        progress.inc(1);
    }

    Ok(dataset)
}

/// 내용을 읽지 않고 폴더 구조만 확인 (드라이런용)
pub fn scan(config: &Config) -> Result<Vec<(LabelDir, Vec<PathBuf>)>> {
    list_labels(&config.input_root, config.sorted)?
        .into_iter()
        .map(|label| {
            let documents = list_documents(&label.path, config.sorted)?;
            Ok((label, documents))
        })
        .collect()
}
