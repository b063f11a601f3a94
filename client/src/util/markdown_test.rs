use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let out = render_markdown_html("Drink **water**:\n\n- morning\n- evening\n");
    assert!(out.contains("<strong>water</strong>"));
    assert!(out.contains("<li>morning</li>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hi"));
}

#[test]
fn plain_text_becomes_paragraph() {
    assert_eq!(render_markdown_html("Sleep 8 hours"), "<p>Sleep 8 hours</p>\n");
}
