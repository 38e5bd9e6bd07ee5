//! 動物判定モジュール
//!
//! 分類ラベルを正規化し、WordNetの上位語階層に
//! animal（生物の意味）が現れるかどうかで動物か判定する。

mod wndb;

pub use wndb::{Lexicon, Synset};

/// 判定基準の見出し語（第1語義＝生物の意味を使う）
const ANIMAL_LEMMA: &str = "animal";

/// 分類ラベルを見出し語形式へ正規化
///
/// 分類器は"Golden retriever, golden retriever"のような同義語リストを
/// 返すことがあるため、最初のカンマ前だけを使い、
/// 空白をアンダースコアに置換して小文字化する。
pub fn normalize_label(label: &str) -> String {
    label
        .split(',')
        .next()
        .unwrap_or(label)
        .trim()
        .replace(' ', "_")
        .to_lowercase()
}

impl Lexicon {
    /// ラベルが動物を指すかどうか
    ///
    /// 正規化した見出し語の各語義について上位語パスを列挙し、
    /// いずれかのパスにanimalの語義が現れれば動物とみなす。
    /// 辞書にない語は動物ではない扱い。
    pub fn is_animal(&self, label: &str) -> bool {
        let lemma = normalize_label(label);

        let animal = match self.first_sense(ANIMAL_LEMMA) {
            Some(offset) => offset,
            None => return false,
        };

        for &sense in self.senses_of(&lemma) {
            for path in self.hypernym_paths(sense) {
                if path.contains(&animal) {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label_synonym_list() {
        assert_eq!(normalize_label("Tabby, tabby cat"), "tabby");
        assert_eq!(
            normalize_label("Golden retriever, golden retriever"),
            "golden_retriever"
        );
    }

    #[test]
    fn test_normalize_label_plain() {
        assert_eq!(normalize_label("laptop"), "laptop");
        assert_eq!(normalize_label("Egyptian cat"), "egyptian_cat");
    }

    #[test]
    fn test_normalize_label_whitespace() {
        assert_eq!(
            normalize_label("  tiger shark , Galeocerdo cuvieri"),
            "tiger_shark"
        );
    }

    #[test]
    fn test_normalize_label_empty() {
        assert_eq!(normalize_label(""), "");
    }
}
