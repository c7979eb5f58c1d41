use crate::page::Page;

pub const BASE_STYLE_ID: &str = "fx-base-styles";
pub const RAINBOW_STYLE_ID: &str = "fx-rainbow";

/// Rules for the classes the effects toggle at runtime.
pub const BASE_STYLES: &str = r#"
.fade-in {
    animation: fadeInUp 0.8s ease forwards;
}

.back-to-top {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    width: 50px;
    height: 50px;
    background: linear-gradient(135deg, var(--primary), var(--primary-light));
    color: white;
    border: none;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    opacity: 0;
    visibility: hidden;
    transition: all 0.3s ease;
    z-index: 1000;
    box-shadow: 0 4px 20px rgba(99, 102, 241, 0.4);
}

.back-to-top.visible {
    opacity: 1;
    visibility: visible;
}

.back-to-top:hover {
    transform: translateY(-5px);
    box-shadow: 0 8px 30px rgba(99, 102, 241, 0.6);
}

.back-to-top i {
    font-size: 1.25rem;
}

.cursor-trail {
    position: fixed;
    width: 20px;
    height: 20px;
    border-radius: 50%;
    background: var(--primary);
    pointer-events: none;
    z-index: 9999;
    opacity: 0.5;
    filter: blur(2px);
}

.typing-done::after {
    content: '';
    display: inline-block;
    width: 2px;
    height: 1.2em;
    background: var(--primary);
    margin-left: 0.2rem;
    animation: blink 1s step-end infinite;
}

@keyframes blink {
    50% { opacity: 0; }
}

@media (max-width: 768px) {
    .back-to-top {
        bottom: 1rem;
        right: 1rem;
        width: 45px;
        height: 45px;
    }

    .cursor-trail {
        display: none;
    }
}
"#;

pub const RAINBOW_KEYFRAMES: &str = r#"
@keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    100% { filter: hue-rotate(360deg); }
}
"#;

/// Appends a `<style id=..>` block to the head unless one with that id exists.
pub fn inject<P: Page>(page: &P, id: &str, css: &str) {
    if page.by_id(id).is_some() {
        return;
    }
    let (Some(head), Some(style)) = (page.head(), page.create_element("style")) else {
        return;
    };
    page.set_attribute(&style, "id", id);
    page.set_text(&style, css);
    page.append_child(&head, &style);
}
