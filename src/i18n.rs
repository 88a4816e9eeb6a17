use std::collections::HashMap;

pub struct I18n {
    translations: HashMap<String, HashMap<String, String>>,
    current_lang: String,
}

impl I18n {
    pub fn new(lang: &str) -> Self {
        let mut translations = HashMap::new();

        // English
        let mut en = HashMap::new();
        en.insert("error_label".to_string(), "Error:".to_string());
        en.insert("usage_hint".to_string(), "Usage: ftime [--times FILE | -t FILE] -- COMMAND [ARGS...]".to_string());
        en.insert("error_missing_command".to_string(), "No command given".to_string());
        en.insert("error_open_times_file".to_string(), "Cannot open timings file {0}".to_string());
        en.insert("error_write_timing".to_string(), "Cannot write timing to {0}".to_string());
        en.insert("error_spawn_command".to_string(), "Cannot start command `{0}`".to_string());
        en.insert("error_wait_command".to_string(), "Cannot wait for command `{0}`".to_string());

        // Chinese
        let mut zh = HashMap::new();
        zh.insert("error_label".to_string(), "错误:".to_string());
        zh.insert("usage_hint".to_string(), "用法: ftime [--times 文件 | -t 文件] -- 命令 [参数...]".to_string());
        zh.insert("error_missing_command".to_string(), "未指定命令".to_string());
        zh.insert("error_open_times_file".to_string(), "无法打开计时文件 {0}".to_string());
        zh.insert("error_write_timing".to_string(), "无法写入计时到 {0}".to_string());
        zh.insert("error_spawn_command".to_string(), "无法启动命令 `{0}`".to_string());
        zh.insert("error_wait_command".to_string(), "无法等待命令 `{0}`".to_string());

        translations.insert("en".to_string(), en);
        translations.insert("zh".to_string(), zh);

        let effective_lang = if lang.starts_with("zh") || lang == "cn" || lang == "chinese" {
            "zh"
        } else {
            "en"
        };

        Self {
            translations,
            current_lang: effective_lang.to_string(),
        }
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(lang_map) = self.translations.get(&self.current_lang) {
            if let Some(value) = lang_map.get(key) {
                return value.clone();
            }
        }
        key.to_string()
    }

    pub fn t_format(&self, key: &str, args: &[&str]) -> String {
        let template = self.t(key);
        let mut result = template;
        for (i, arg) in args.iter().enumerate() {
            result = result.replace(&format!("{{{}}}", i), arg);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection() {
        assert_eq!(I18n::new("zh_CN").t("error_label"), "错误:");
        assert_eq!(I18n::new("chinese").t("error_label"), "错误:");
        assert_eq!(I18n::new("en_US").t("error_label"), "Error:");
        assert_eq!(I18n::new("fr_FR").t("error_label"), "Error:");
    }

    #[test]
    fn test_format_and_missing_key() {
        let i18n = I18n::new("en");
        assert_eq!(
            i18n.t_format("error_spawn_command", &["make"]),
            "Cannot start command `make`"
        );
        assert_eq!(i18n.t("no_such_key"), "no_such_key");
    }
}
