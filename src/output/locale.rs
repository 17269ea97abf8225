//! Framing strings for human-readable reports.
//!
//! Formatters print suite titles and descriptions as written; built-in
//! suites are resolved in the report's locale so the two match.

use std::str::FromStr;

/// Report language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "zh" | "zh-cn" | "zh-hans" => Ok(Self::ZhCn),
            _ => Err(format!("unknown locale: {}", s)),
        }
    }
}

impl Locale {
    /// Heading of the existence section.
    pub fn existence_heading(&self) -> &'static str {
        match self {
            Locale::En => "File existence",
            Locale::ZhCn => "检查文件存在性",
        }
    }

    /// Suffix for a target that does not exist.
    pub fn file_missing(&self) -> &'static str {
        match self {
            Locale::En => "file not found",
            Locale::ZhCn => "文件不存在",
        }
    }

    /// Suffix for a rule whose pattern was not found.
    pub fn pattern_missing(&self) -> &'static str {
        match self {
            Locale::En => "not found",
            Locale::ZhCn => "未找到",
        }
    }

    /// Prefix for a file that could not be read.
    pub fn read_failed(&self) -> &'static str {
        match self {
            Locale::En => "failed to read file",
            Locale::ZhCn => "读取文件失败",
        }
    }

    pub fn summary_heading(&self) -> &'static str {
        match self {
            Locale::En => "Summary",
            Locale::ZhCn => "测试总结",
        }
    }

    pub fn passed_checks(&self, passed: usize, total: usize) -> String {
        match self {
            Locale::En => format!("Passed checks: {}/{}", passed, total),
            Locale::ZhCn => format!("通过的检查: {}/{}", passed, total),
        }
    }

    pub fn completion(&self, percentage: f64) -> String {
        match self {
            Locale::En => format!("Completion: {:.1}%", percentage),
            Locale::ZhCn => format!("完成度: {:.1}%", percentage),
        }
    }

    pub fn success(&self, subject: &str) -> String {
        match self {
            Locale::En => format!("{} is complete!", subject),
            Locale::ZhCn => format!("{}完全成功！", subject),
        }
    }

    pub fn needs_fixes(&self, subject: &str, failed: usize) -> String {
        match self {
            Locale::En => format!("{} needs fixes ({} to fix)", subject, failed),
            Locale::ZhCn => format!("{}需要完善 ({}项需要修复)", subject, failed),
        }
    }

    pub fn next_steps_heading(&self) -> &'static str {
        match self {
            Locale::En => "Next steps:",
            Locale::ZhCn => "下一步:",
        }
    }
}
