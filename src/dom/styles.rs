//! Keyframe installation
//!
//! The fixed keyframe block (particle float, shimmer) plus the
//! reduce-motion kill switch, installed once by the composition root.
//! Re-invocation is guarded by the style element's id.

const STYLE_ID: &str = "vintage-keyframes";

pub fn keyframes_css() -> &'static str {
    r#"
@keyframes particle-float {
    0%   { transform: translateY(0px) rotate(0deg); opacity: 0; }
    10%  { opacity: 1; }
    90%  { opacity: 1; }
    100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; }
}

@keyframes shimmer {
    0%   { background-position: -200% 0; }
    100% { background-position: 200% 0; }
}

.particle {
    animation: particle-float 3s linear infinite;
}

.shimmer-effect {
    background: linear-gradient(90deg, transparent, rgba(255,255,255,0.1), transparent);
    background-size: 200% 100%;
    animation: shimmer 2s infinite;
}

body.reduce-motion *,
body.reduce-motion *::before,
body.reduce-motion *::after {
    animation: none !important;
    transition: none !important;
}
"#
}

/// Install the keyframe block into `<head>`. Idempotent: a second call
/// finds the existing style element and returns.
pub fn install_once() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(keyframes_css()));
        let _ = head.append_child(&style);
        log::debug!("keyframes installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframe_block_defines_both_animations() {
        let css = keyframes_css();
        assert!(css.contains("@keyframes particle-float"));
        assert!(css.contains("@keyframes shimmer"));
        assert!(css.contains("body.reduce-motion"));
    }
}
