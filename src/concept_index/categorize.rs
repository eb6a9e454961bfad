//! Fixed numeric-range bucketing of concept records.

use crate::model::ConceptRecord;

const CATEGORY_WIDTH: u32 = 100;

/// One fixed 100-wide range of the concept numbering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Short label, used in table headings and console breakdowns.
    pub name: &'static str,
    /// Longer wording, used in the numbering legend.
    pub legend: &'static str,
    /// Inclusive lower bound of the range.
    pub lo: u32,
}

/// The seven declared ranges, in rendering order. The numbering plan stops at
/// 699.
pub const CATEGORIES: [Category; 7] = [
    Category { name: "哲学基础", legend: "哲学基础概念", lo: 0 },
    Category { name: "技术伦理", legend: "技术伦理概念", lo: 100 },
    Category { name: "创作方法论", legend: "创作方法论", lo: 200 },
    Category { name: "美学体系", legend: "美学体系", lo: 300 },
    Category { name: "作品形态", legend: "作品形态分类", lo: 400 },
    Category { name: "工具设施", legend: "工具与基础设施", lo: 500 },
    Category { name: "社区传播", legend: "社区与传播", lo: 600 },
];

impl Category {
    /// Inclusive upper bound of the range.
    pub fn hi(&self) -> u32 {
        self.lo + CATEGORY_WIDTH - 1
    }

    pub fn contains(&self, number: u32) -> bool {
        number >= self.lo && number <= self.hi()
    }

    /// Heading label, e.g. `哲学基础 (UMA-000 ~ UMA-099)`.
    pub fn label(&self, prefix: &str) -> String {
        format!(
            "{} ({}-{:03} ~ {}-{:03})",
            self.name,
            prefix,
            self.lo,
            prefix,
            self.hi()
        )
    }
}

/// Buckets records into the seven ranges, sorted by id within each bucket
/// (ids are zero-padded to three digits, so lexicographic order is numeric
/// order).
///
/// Ids whose numeric suffix is 700 or above, or does not parse at all, land
/// in no bucket: the declared ranges stop at 699 and nothing past that has
/// ever been assigned a category. Such records still count toward the run
/// total, so the console total can exceed the sum of the table rows.
pub fn categorize(records: &[ConceptRecord]) -> [Vec<&ConceptRecord>; 7] {
    let mut sorted: Vec<&ConceptRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut buckets: [Vec<&ConceptRecord>; 7] = Default::default();
    for record in sorted {
        let Some(number) = record.number() else {
            continue;
        };
        if let Some(slot) = CATEGORIES.iter().position(|c| c.contains(number)) {
            buckets[slot].push(record);
        }
    }
    buckets
}
