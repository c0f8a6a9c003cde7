use crate::types::TransformConfig;
use scrawl_core::TransformOptions;

/// Converts an optional `TransformConfig` to core `TransformOptions`.
pub fn to_transform_options(config: Option<&TransformConfig>) -> TransformOptions {
    let defaults = TransformOptions::default();
    let Some(cfg) = config else {
        return defaults;
    };

    let section_title_max_chars = if cfg.disable_section_title_limit.unwrap_or(false) {
        None
    } else {
        cfg.section_title_max_chars
            .map(|max| max as usize)
            .or(defaults.section_title_max_chars)
    };

    TransformOptions {
        title_max_chars: cfg
            .title_max_chars
            .map_or(defaults.title_max_chars, |max| max as usize),
        section_title_max_chars,
        keep_entities: cfg.keep_entities.unwrap_or(defaults.keep_entities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_means_defaults() {
        assert_eq!(to_transform_options(None), TransformOptions::default());
        assert_eq!(
            to_transform_options(Some(&TransformConfig::default())),
            TransformOptions::default()
        );
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = TransformConfig {
            title_max_chars: Some(10),
            section_title_max_chars: Some(20),
            disable_section_title_limit: None,
            keep_entities: Some(true),
        };
        let opts = to_transform_options(Some(&cfg));
        assert_eq!(opts.title_max_chars, 10);
        assert_eq!(opts.section_title_max_chars, Some(20));
        assert!(opts.keep_entities);
    }

    #[test]
    fn disabling_the_limit_wins_over_a_value() {
        let cfg = TransformConfig {
            section_title_max_chars: Some(20),
            disable_section_title_limit: Some(true),
            ..Default::default()
        };
        assert_eq!(to_transform_options(Some(&cfg)).section_title_max_chars, None);
    }
}
