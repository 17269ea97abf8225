//! Built-in suites for the RTC driver integration.
//!
//! Each table row carries the pattern or path followed by its English and
//! Simplified Chinese description, so reports can be rendered in either.

use super::{CheckTarget, ContentRule, RuleGroup, Suite};
use crate::output::Locale;

/// Suite used when nothing else is selected.
pub const DEFAULT_SUITE: &str = "rtc";

const RTC_TARGETS: &[Row] = &[
    ("applications/rtc_msh.h", "RTC MSH header", "RTC MSH头文件"),
    ("applications/rtc_msh.c", "RTC MSH implementation", "RTC MSH实现文件"),
    ("applications/RTC_README.md", "RTC documentation", "RTC说明文档"),
    (
        "applications/SConscript",
        "Application build configuration",
        "应用程序构建配置",
    ),
    ("board/Kconfig", "Hardware configuration", "硬件配置文件"),
    (
        "libraries/HAL_Drivers/drv_rtc.c",
        "RTC low-level driver",
        "RTC底层驱动",
    ),
];

const KCONFIG_RULES: &[Row] = &[
    (r"config\s+BSP_USING_RTC", "BSP_USING_RTC option", "BSP_USING_RTC配置项"),
    (r"select\s+RT_USING_RTC", "RT_USING_RTC dependency", "RT_USING_RTC依赖"),
    (
        r"select\s+RT_USING_ALARM",
        "RT_USING_ALARM dependency",
        "RT_USING_ALARM依赖",
    ),
    (r"choice.*RTC clock source", "RTC clock source choice", "RTC时钟源选择"),
    (r"BSP_RTC_USING_WCO", "WCO clock source option", "WCO时钟源选项"),
    (r"BSP_RTC_USING_ILO", "ILO clock source option", "ILO时钟源选项"),
];

const SCONSCRIPT_RULES: &[Row] = &[(
    r"BSP_USING_RTC.*rtc_msh\.c",
    "RTC MSH file compiled conditionally",
    "RTC MSH文件条件编译",
)];

const MSH_RULES: &[Row] = &[
    (r"rtc_read", "rtc_read command implemented", "rtc_read命令实现"),
    (r"rtc_set", "rtc_set command implemented", "rtc_set命令实现"),
    (r"rtc_date", "rtc_date command implemented", "rtc_date命令实现"),
    (r"rtc_time", "rtc_time command implemented", "rtc_time命令实现"),
    (r"rtc_info", "rtc_info command implemented", "rtc_info命令实现"),
    (r"rtc_help", "rtc_help command implemented", "rtc_help命令实现"),
    (r"MSH_CMD_EXPORT.*rtc_", "MSH commands exported", "MSH命令导出"),
    (r"INIT_APP_EXPORT", "Auto-initialization exported", "自动初始化导出"),
    (r"rt_device_find.*rtc", "RTC device lookup", "RTC设备查找"),
    (
        r"RT_DEVICE_CTRL_RTC_GET_TIME",
        "RTC time read control",
        "RTC时间读取控制",
    ),
    (
        r"RT_DEVICE_CTRL_RTC_SET_TIME",
        "RTC time set control",
        "RTC时间设置控制",
    ),
];

const HEADER_RULES: &[Row] = &[
    (r"rtc_msh_init", "Init function declared", "初始化函数声明"),
    (r"#ifndef\s+RTC_MSH_H__", "Include guard", "头文件保护"),
];

const DRIVER_RULES: &[Row] = &[
    (r"rt_hw_rtc_register", "RTC device registration", "RTC设备注册"),
    (r"cyhal_rtc_init", "HAL RTC initialization", "HAL RTC初始化"),
    (r"RT_DEVICE_CTRL_RTC_GET_TIME", "RTC read interface", "RTC读取接口"),
    (r"RT_DEVICE_CTRL_RTC_SET_TIME", "RTC set interface", "RTC设置接口"),
    (r"BSP_USING_RTC", "RTC conditional compilation", "RTC条件编译"),
];

const QUICK_KCONFIG_RULES: &[Row] = &[(
    "BSP_USING_RTC",
    "BSP_USING_RTC configuration found",
    "BSP_USING_RTC配置项",
)];

const QUICK_SCONSCRIPT_RULES: &[Row] = &[(
    r"rtc_msh\.c",
    "RTC MSH file in build config",
    "RTC MSH文件已加入构建配置",
)];

const QUICK_MSH_RULES: &[Row] = &[
    (r"rtc_read", "rtc_read command implemented", "rtc_read命令实现"),
    (r"rtc_set", "rtc_set command implemented", "rtc_set命令实现"),
    (r"rtc_date", "rtc_date command implemented", "rtc_date命令实现"),
    (r"rtc_time", "rtc_time command implemented", "rtc_time命令实现"),
    (r"rtc_info", "rtc_info command implemented", "rtc_info命令实现"),
    (r"rtc_help", "rtc_help command implemented", "rtc_help命令实现"),
    (r"MSH_CMD_EXPORT", "MSH commands exported", "MSH命令导出"),
];

const NEXT_STEPS: &[(&str, &str)] = &[
    (
        "Enable RTC: menuconfig -> Hardware Drivers Config -> Enable RTC",
        "启用RTC配置: menuconfig → Hardware Drivers Config → Enable RTC",
    ),
    ("Build project: scons", "编译项目: scons"),
    (
        "Flash firmware and test MSH commands",
        "烧录固件并测试MSH命令",
    ),
];

const RTC_COMMANDS: &[(&str, &str)] = &[
    ("Available RTC commands:", "可用的RTC命令:"),
    ("  rtc_read    - Read current time", "  rtc_read    - 读取当前时间"),
    ("  rtc_set     - Set date and time", "  rtc_set     - 设置日期和时间"),
    ("  rtc_date    - Set date only", "  rtc_date    - 仅设置日期"),
    ("  rtc_time    - Set time only", "  rtc_time    - 仅设置时间"),
    ("  rtc_info    - Show RTC info", "  rtc_info    - 显示RTC信息"),
    ("  rtc_help    - Show help", "  rtc_help    - 显示帮助"),
];

/// `(pattern or path, English text, Chinese text)`.
type Row = (&'static str, &'static str, &'static str);

/// Names of all built-in suites, default first.
pub fn builtin_names() -> &'static [&'static str] {
    &["rtc", "rtc-quick"]
}

/// Build a built-in suite by name, with its text in `locale`.
pub fn get(name: &str, locale: Locale) -> Option<Suite> {
    let text = Text(locale);
    match name {
        "rtc" => Some(rtc(text)),
        "rtc-quick" => Some(rtc_quick(text)),
        _ => None,
    }
}

/// Picks the English or Chinese column of a table.
#[derive(Clone, Copy)]
struct Text(Locale);

impl Text {
    fn pick(self, en: &'static str, zh: &'static str) -> &'static str {
        match self.0 {
            Locale::En => en,
            Locale::ZhCn => zh,
        }
    }

    fn targets(self, rows: &[Row]) -> Vec<CheckTarget> {
        rows.iter()
            .map(|(path, en, zh)| CheckTarget::new(*path, self.pick(*en, *zh)))
            .collect()
    }

    fn group(self, title: (&'static str, &'static str), path: &str, rows: &[Row]) -> RuleGroup {
        RuleGroup {
            title: self.pick(title.0, title.1).to_string(),
            path: path.to_string(),
            description: self.description_for(path),
            rules: rows
                .iter()
                .map(|(pattern, en, zh)| ContentRule::new(*pattern, self.pick(*en, *zh)))
                .collect(),
        }
    }

    fn description_for(self, path: &str) -> String {
        let (en, zh) = match path {
            "board/Kconfig" => ("RTC configuration options", "RTC配置选项"),
            "applications/SConscript" => ("Build configuration", "构建配置"),
            "applications/rtc_msh.c" => ("RTC MSH implementation", "RTC MSH实现"),
            "applications/rtc_msh.h" => ("RTC header", "RTC头文件"),
            _ => ("RTC low-level driver", "RTC底层驱动"),
        };
        self.pick(en, zh).to_string()
    }

    fn lines(self, rows: &[(&'static str, &'static str)]) -> Vec<String> {
        rows.iter().map(|(en, zh)| self.pick(*en, *zh).to_string()).collect()
    }
}

fn rtc(text: Text) -> Suite {
    Suite {
        name: "rtc".into(),
        title: text.pick("RTC Driver Integration Test", "RTC驱动集成测试").into(),
        subject: text.pick("RTC driver integration", "RTC驱动集成").into(),
        targets: text.targets(RTC_TARGETS),
        groups: vec![
            text.group(
                ("Kconfig configuration", "检查Kconfig配置"),
                "board/Kconfig",
                KCONFIG_RULES,
            ),
            text.group(
                ("SConscript build configuration", "检查SConscript构建配置"),
                "applications/SConscript",
                SCONSCRIPT_RULES,
            ),
            text.group(
                ("RTC MSH implementation", "检查RTC MSH实现"),
                "applications/rtc_msh.c",
                MSH_RULES,
            ),
            text.group(
                ("RTC header", "检查RTC头文件"),
                "applications/rtc_msh.h",
                HEADER_RULES,
            ),
            text.group(
                ("RTC low-level driver", "检查RTC底层驱动"),
                "libraries/HAL_Drivers/drv_rtc.c",
                DRIVER_RULES,
            ),
        ],
        next_steps: text.lines(NEXT_STEPS),
        notes: vec![],
    }
}

fn rtc_quick(text: Text) -> Suite {
    Suite {
        name: "rtc-quick".into(),
        title: text.pick("RTC Driver Integration Test", "RTC驱动集成测试").into(),
        subject: text.pick("RTC driver integration", "RTC驱动集成").into(),
        targets: text.targets(RTC_TARGETS),
        groups: vec![
            text.group(
                ("Kconfig RTC configuration", "检查Kconfig RTC配置"),
                "board/Kconfig",
                QUICK_KCONFIG_RULES,
            ),
            text.group(
                ("SConscript build configuration", "检查SConscript构建配置"),
                "applications/SConscript",
                QUICK_SCONSCRIPT_RULES,
            ),
            text.group(
                ("RTC MSH implementation", "检查RTC MSH实现"),
                "applications/rtc_msh.c",
                QUICK_MSH_RULES,
            ),
        ],
        next_steps: text.lines(NEXT_STEPS),
        notes: text.lines(RTC_COMMANDS),
    }
}
