//! Style computation for block frames.
//!
//! Maps the optional `BlockStyles` of a block to a height class plus an
//! inline style string. Only the image block path consumes the
//! background fields; listings use the height class alone.

use contracts::shared::content_block::BlockStyles;

/// CSS class for the frame height preset
pub fn height_class(styles: Option<&BlockStyles>) -> &'static str {
    match styles.and_then(|s| s.height.as_deref()) {
        Some("small") => "block-frame--small",
        Some("large") => "block-frame--large",
        _ => "block-frame--medium",
    }
}

/// Inline style string for background and padding overrides
pub fn inline_style(styles: Option<&BlockStyles>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(styles) = styles {
        if let Some(color) = &styles.background_color {
            parts.push(format!("background-color: {}", color));
        }
        if let Some(url) = &styles.background_image_url {
            parts.push(format!(
                "background-image: url('{}'); background-size: cover",
                url
            ));
        }
        if let Some(padding) = &styles.padding {
            parts.push(format!("padding: {}", padding));
        }
    }

    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_styles_fall_back_to_medium() {
        assert_eq!(height_class(None), "block-frame--medium");
        assert_eq!(inline_style(None), "");
    }

    #[test]
    fn height_presets_map_to_classes() {
        let styles = BlockStyles {
            height: Some("small".into()),
            ..Default::default()
        };
        assert_eq!(height_class(Some(&styles)), "block-frame--small");

        let styles = BlockStyles {
            height: Some("large".into()),
            ..Default::default()
        };
        assert_eq!(height_class(Some(&styles)), "block-frame--large");

        // unknown presets degrade to medium
        let styles = BlockStyles {
            height: Some("huge".into()),
            ..Default::default()
        };
        assert_eq!(height_class(Some(&styles)), "block-frame--medium");
    }

    #[test]
    fn inline_style_composes_the_given_fields() {
        let styles = BlockStyles {
            background_color: Some("#fafafa".into()),
            padding: Some("2rem".into()),
            ..Default::default()
        };
        assert_eq!(
            inline_style(Some(&styles)),
            "background-color: #fafafa; padding: 2rem"
        );
    }
}
