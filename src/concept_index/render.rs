//! Index document rendering.
//!
//! The document layout is fixed: title, numbering legend, template
//! description, summary + timestamp, one table per non-empty category in
//! declaration order, contribution footer. Everything except the timestamp
//! line is a pure function of the records.

use crate::categorize::CATEGORIES;
use crate::config::IndexConfig;
use crate::model::ConceptRecord;
use chrono::{DateTime, Local};

const MAX_RELATED_SHOWN: usize = 3;

pub fn render(
    config: &IndexConfig,
    categorized: &[Vec<&ConceptRecord>; 7],
    total: usize,
    generated_at: DateTime<Local>,
) -> String {
    let prefix = &config.prefix;
    let mut lines: Vec<String> = Vec::new();

    lines.push("# 概念库".to_string());
    lines.push(String::new());

    lines.push("## 概念编号系统".to_string());
    lines.push(format!("{prefix}-XXX：三位数字编号，按创建顺序递增"));
    for category in &CATEGORIES {
        lines.push(format!(
            "- {prefix}-{:03} ~ {prefix}-{:03}：{}",
            category.lo,
            category.hi(),
            category.legend
        ));
    }
    lines.push(String::new());

    lines.push("## 概念文件模板".to_string());
    lines.push("每个概念文件应包含：".to_string());
    lines.push("1. **定义**：清晰的核心定义".to_string());
    lines.push("2. **原理**：理论基础与逻辑".to_string());
    lines.push("3. **历史脉络**：思想来源与演变".to_string());
    lines.push("4. **应用场景**：在UMA创作中的具体应用".to_string());
    lines.push("5. **技术实现**：相关的技术方案".to_string());
    lines.push("6. **示例**：具体案例说明".to_string());
    lines.push("7. **相关概念**：与其他概念的关联".to_string());
    lines.push("8. **争议与讨论**：开放性问题".to_string());
    lines.push(String::new());

    lines.push(format!("## 概念索引（共{total}个概念）"));
    lines.push(format!(
        "*最后更新：{}*",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    for (category, records) in CATEGORIES.iter().zip(categorized) {
        if records.is_empty() {
            continue;
        }
        lines.push(format!("### {}", category.label(prefix)));
        lines.push(String::new());
        lines.push("| 编号 | 名称 | 描述 | 相关概念 | 最后更新 |".to_string());
        lines.push("|------|------|------|----------|----------|".to_string());
        for record in records {
            lines.push(format!(
                "| [{}](./{}) | {} | {} | {} | {} |",
                record.id,
                record.filename,
                record.name,
                record.description,
                related_cell(&record.related),
                record.modified
            ));
        }
        lines.push(String::new());
    }

    lines.push("## 添加新概念".to_string());
    lines.push(String::new());
    lines.push(format!(
        "1. 复制 `TEMPLATES/concept-template.md` 到 `{}/` 目录",
        config.concepts_dir.display()
    ));
    lines.push("2. 填写概念内容，确保格式正确".to_string());
    lines.push("3. 运行 `concept-index` 更新索引".to_string());
    lines.push("4. 提交Pull Request".to_string());

    lines.join("\n")
}

/// First three related concepts joined with ", ", with a trailing `...` when
/// more exist.
fn related_cell(related: &[String]) -> String {
    let mut cell = related
        .iter()
        .take(MAX_RELATED_SHOWN)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if related.len() > MAX_RELATED_SHOWN {
        cell.push_str("...");
    }
    cell
}
