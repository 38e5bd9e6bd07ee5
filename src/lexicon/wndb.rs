//! WordNetデータベース（wndb形式）パーサ
//!
//! index.noun / data.noun を読み込み、
//! 見出し語→語義と語義→上位語のマップを構築する。

use crate::error::{PokedexError, Result};
use std::collections::HashMap;
use std::path::Path;

/// 1語義（synset）
#[derive(Debug, Clone)]
pub struct Synset {
    pub offset: u64,
    pub lemmas: Vec<String>,
    /// 上位語（@ / @i ポインタ）のオフセット
    pub hypernyms: Vec<u64>,
}

/// 名詞辞書
#[derive(Debug, Default)]
pub struct Lexicon {
    /// 見出し語 → 語義オフセット（頻度順）
    index: HashMap<String, Vec<u64>>,
    /// オフセット → 語義
    synsets: HashMap<u64, Synset>,
}

impl Lexicon {
    /// 辞書ディレクトリから読み込み
    pub fn load(dir: &Path) -> Result<Self> {
        let index_path = dir.join("index.noun");
        let data_path = dir.join("data.noun");

        if !index_path.exists() || !data_path.exists() {
            return Err(PokedexError::Lexicon(format!(
                "WordNet辞書が見つかりません: {}（index.noun / data.noun を配置してください）",
                dir.display()
            )));
        }

        let index_content = std::fs::read_to_string(&index_path)?;
        let data_content = std::fs::read_to_string(&data_path)?;
        Ok(Self::from_strs(&index_content, &data_content))
    }

    /// 文字列から構築
    pub fn from_strs(index: &str, data: &str) -> Self {
        let mut lexicon = Self::default();

        for line in index.lines() {
            // ライセンスヘッダ行は空白で始まる
            if line.starts_with(' ') {
                continue;
            }
            if let Some((lemma, offsets)) = parse_index_line(line) {
                lexicon.index.insert(lemma, offsets);
            }
        }

        for line in data.lines() {
            if line.starts_with(' ') {
                continue;
            }
            if let Some(synset) = parse_data_line(line) {
                lexicon.synsets.insert(synset.offset, synset);
            }
        }

        lexicon
    }

    /// 見出し語の語義オフセット一覧
    pub fn senses_of(&self, lemma: &str) -> &[u64] {
        self.index.get(lemma).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// 第1語義（最頻出の意味）
    pub fn first_sense(&self, lemma: &str) -> Option<u64> {
        self.index.get(lemma).and_then(|v| v.first().copied())
    }

    pub fn synset(&self, offset: u64) -> Option<&Synset> {
        self.synsets.get(&offset)
    }

    /// 語義数
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// 語義から根までの上位語パスをすべて列挙
    ///
    /// 各パスは起点の語義自身を含む。
    pub fn hypernym_paths(&self, offset: u64) -> Vec<Vec<u64>> {
        let mut paths = Vec::new();
        self.collect_paths(offset, Vec::new(), &mut paths);
        paths
    }

    fn collect_paths(&self, offset: u64, mut trail: Vec<u64>, out: &mut Vec<Vec<u64>>) {
        // 循環ガード
        if trail.contains(&offset) {
            out.push(trail);
            return;
        }
        trail.push(offset);

        let hypernyms = match self.synsets.get(&offset) {
            Some(s) if !s.hypernyms.is_empty() => &s.hypernyms,
            _ => {
                out.push(trail);
                return;
            }
        };

        for &hypernym in hypernyms {
            self.collect_paths(hypernym, trail.clone(), out);
        }
    }
}

/// index.nounの1行をパース
///
/// 形式: lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...
fn parse_index_line(line: &str) -> Option<(String, Vec<u64>)> {
    let mut fields = line.split_whitespace();

    let lemma = fields.next()?;
    let pos = fields.next()?;
    if pos != "n" {
        return None;
    }

    let synset_cnt: usize = fields.next()?.parse().ok()?;
    let p_cnt: usize = fields.next()?.parse().ok()?;
    for _ in 0..p_cnt {
        fields.next()?;
    }
    let _sense_cnt = fields.next()?;
    let _tagsense_cnt = fields.next()?;

    let mut offsets = Vec::with_capacity(synset_cnt);
    for _ in 0..synset_cnt {
        offsets.push(fields.next()?.parse().ok()?);
    }

    Some((lemma.to_string(), offsets))
}

/// data.nounの1行をパース
///
/// 形式: offset lex_filenum ss_type w_cnt (word lex_id)... p_cnt (symbol offset pos src/tgt)... | gloss
fn parse_data_line(line: &str) -> Option<Synset> {
    // グロスは使わない
    let body = match line.find(" | ") {
        Some(i) => &line[..i],
        None => line,
    };
    let mut fields = body.split_whitespace();

    let offset: u64 = fields.next()?.parse().ok()?;
    let _lex_filenum = fields.next()?;
    let ss_type = fields.next()?;
    if ss_type != "n" {
        return None;
    }

    // w_cntは16進
    let w_cnt = usize::from_str_radix(fields.next()?, 16).ok()?;
    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        lemmas.push(fields.next()?.to_string());
        let _lex_id = fields.next()?;
    }

    let p_cnt: usize = fields.next()?.parse().ok()?;
    let mut hypernyms = Vec::new();
    for _ in 0..p_cnt {
        let symbol = fields.next()?;
        let target: u64 = fields.next()?.parse().ok()?;
        let pos = fields.next()?;
        let _source_target = fields.next()?;
        if (symbol == "@" || symbol == "@i") && pos == "n" {
            hypernyms.push(target);
        }
    }

    Some(Synset {
        offset,
        lemmas,
        hypernyms,
    })
}
