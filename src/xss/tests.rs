use super::*;

fn tokens(input: &[u8], flags: Html5Flags) -> Vec<(Html5TokenKind, Vec<u8>)> {
    let mut h5 = Html5State::new(input, flags);
    let mut out = Vec::new();
    while h5.next() {
        out.push((h5.token_type, h5.token().to_vec()));
    }
    out
}

mod html5_tokens {
    use super::*;

    #[test]
    fn tag_with_attribute() {
        let toks = tokens(b"<a href=\"x\">y</a>", Html5Flags::DataState);
        assert_eq!(
            toks,
            vec![
                (Html5TokenKind::TagNameOpen, b"a".to_vec()),
                (Html5TokenKind::AttrName, b"href".to_vec()),
                (Html5TokenKind::AttrValue, b"x".to_vec()),
                (Html5TokenKind::TagNameClose, b">".to_vec()),
                (Html5TokenKind::DataText, b"y".to_vec()),
                (Html5TokenKind::TagClose, b"a".to_vec()),
            ]
        );
    }

    #[test]
    fn self_closing_tag() {
        let toks = tokens(b"<br/>", Html5Flags::DataState);
        assert_eq!(
            toks,
            vec![
                (Html5TokenKind::TagNameOpen, b"br".to_vec()),
                (Html5TokenKind::TagNameSelfClose, b"/>".to_vec()),
            ]
        );
    }

    #[test]
    fn plain_text() {
        let toks = tokens(b"no markup here", Html5Flags::DataState);
        assert_eq!(toks, vec![(Html5TokenKind::DataText, b"no markup here".to_vec())]);
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        let toks = tokens(b"a < b", Html5Flags::DataState);
        assert_eq!(toks[0], (Html5TokenKind::DataText, b"a ".to_vec()));
        assert_eq!(toks[1], (Html5TokenKind::DataText, b"<".to_vec()));
        assert_eq!(toks[2], (Html5TokenKind::DataText, b" b".to_vec()));
    }

    #[test]
    fn unquoted_attribute_value() {
        let toks = tokens(b"<img src=x>", Html5Flags::DataState);
        assert_eq!(
            toks,
            vec![
                (Html5TokenKind::TagNameOpen, b"img".to_vec()),
                (Html5TokenKind::AttrName, b"src".to_vec()),
                (Html5TokenKind::AttrValue, b"x".to_vec()),
                (Html5TokenKind::TagNameClose, b">".to_vec()),
            ]
        );
    }

    #[test]
    fn comment_token() {
        let toks = tokens(b"<!-- note -->after", Html5Flags::DataState);
        assert_eq!(toks[0], (Html5TokenKind::TagComment, b" note ".to_vec()));
        assert_eq!(toks[1], (Html5TokenKind::DataText, b"after".to_vec()));
    }

    #[test]
    fn bogus_comment_variants() {
        let toks = tokens(b"<?php echo ?>", Html5Flags::DataState);
        assert_eq!(toks[0].0, Html5TokenKind::TagComment);

        let toks = tokens(b"<% asp %>x", Html5Flags::DataState);
        assert_eq!(toks[0], (Html5TokenKind::TagComment, b" asp ".to_vec()));
        assert_eq!(toks[1], (Html5TokenKind::DataText, b"x".to_vec()));
    }

    #[test]
    fn cdata_is_data_text() {
        let toks = tokens(b"<![CDATA[payload]]>", Html5Flags::DataState);
        assert_eq!(toks[0], (Html5TokenKind::DataText, b"payload".to_vec()));
    }

    #[test]
    fn doctype_token() {
        let toks = tokens(b"<!DOCTYPE html>", Html5Flags::DataState);
        assert_eq!(toks[0].0, Html5TokenKind::Doctype);
    }

    #[test]
    fn value_context_starts_inside_the_value() {
        // no opening quote to skip when the machine starts at offset 0
        let toks = tokens(b"x' onerror='y", Html5Flags::ValueSingleQuote);
        assert_eq!(toks[0], (Html5TokenKind::AttrValue, b"x".to_vec()));
        assert_eq!(toks[1], (Html5TokenKind::AttrName, b"onerror".to_vec()));
        assert_eq!(toks[2], (Html5TokenKind::AttrValue, b"y".to_vec()));
    }

    #[test]
    fn unterminated_comment_runs_to_eof() {
        let toks = tokens(b"<!-- never closed", Html5Flags::DataState);
        assert_eq!(toks, vec![(Html5TokenKind::TagComment, b" never closed".to_vec())]);
    }

    #[test]
    fn tag_name_keeps_embedded_nul() {
        let toks = tokens(b"<scr\x00ipt>x", Html5Flags::DataState);
        assert_eq!(toks[0], (Html5TokenKind::TagNameOpen, b"scr\x00ipt".to_vec()));
    }
}

mod entity_decoding {
    use super::*;

    #[test]
    fn numeric_references() {
        assert_eq!(html_decode_char_at(b"&#65;x"), (65, 5));
        assert_eq!(html_decode_char_at(b"&#x41;x"), (65, 6));
        assert_eq!(html_decode_char_at(b"&#106"), (106, 5));
        assert_eq!(html_decode_char_at(b"A"), (65, 1));
    }

    #[test]
    fn named_references_are_not_decoded() {
        assert_eq!(html_decode_char_at(b"&amp;"), (i32::from(b'&'), 1));
        assert_eq!(html_decode_char_at(b"&#"), (i32::from(b'&'), 1));
        assert_eq!(html_decode_char_at(b"&#x"), (i32::from(b'&'), 1));
        assert_eq!(html_decode_char_at(b"&#xzz"), (i32::from(b'&'), 1));
    }

    #[test]
    fn overflow_aborts_the_reference() {
        assert_eq!(html_decode_char_at(b"&#1050000;"), (i32::from(b'&'), 1));
        assert_eq!(html_decode_char_at(b"&#x110000;"), (i32::from(b'&'), 1));
    }

    #[test]
    fn prefix_match_decodes_on_the_fly() {
        assert!(htmlencode_startswith(b"JAVA", b"javascript:alert(1)"));
        assert!(htmlencode_startswith(b"JAVA", b"&#106;avascript:alert(1)"));
        assert!(htmlencode_startswith(b"JAVA", b"&#x6A;avascript:x"));
        assert!(htmlencode_startswith(b"JAVA", b"  java"));
        assert!(htmlencode_startswith(b"JAVA", b"j\x00a\nva"));
        assert!(!htmlencode_startswith(b"JAVA", b"jav"));
        assert!(!htmlencode_startswith(b"JAVA", b"xjava"));
    }
}

mod blacklists {
    use super::*;

    #[test]
    fn tag_blacklist() {
        assert!(is_black_tag(b"script"));
        assert!(is_black_tag(b"SCRIPT"));
        assert!(is_black_tag(b"iframe"));
        assert!(is_black_tag(b"svg"));
        assert!(is_black_tag(b"svganything"));
        assert!(is_black_tag(b"xsl:template"));
        assert!(!is_black_tag(b"div"));
        assert!(!is_black_tag(b"a"));
        assert!(!is_black_tag(b"p"));
    }

    #[test]
    fn attr_classification() {
        assert_eq!(classify_attr(b"onclick"), AttrClass::Black);
        assert_eq!(classify_attr(b"ONLOAD"), AttrClass::Black);
        assert_eq!(classify_attr(b"onerror"), AttrClass::Black);
        assert_eq!(classify_attr(b"href"), AttrClass::AttrUrl);
        assert_eq!(classify_attr(b"SRC"), AttrClass::AttrUrl);
        assert_eq!(classify_attr(b"style"), AttrClass::Style);
        assert_eq!(classify_attr(b"attributename"), AttrClass::AttrIndirect);
        assert_eq!(classify_attr(b"datasrc"), AttrClass::Black);
        assert_eq!(classify_attr(b"xmlns:xlink"), AttrClass::Black);
        assert_eq!(classify_attr(b"class"), AttrClass::None);
        assert_eq!(classify_attr(b"id"), AttrClass::None);
    }

    #[test]
    fn on_prefix_needs_a_known_event() {
        // base64 junk after "on" is not an event handler
        assert_eq!(classify_attr(b"onY29va2llcw"), AttrClass::None);
        assert_eq!(classify_attr(b"onfoofoo"), AttrClass::None);
        // but a known event followed by junk still matches
        assert_eq!(classify_attr(b"onclick2"), AttrClass::Black);
    }

    #[test]
    fn url_scheme_check() {
        assert!(is_black_url(b"javascript:alert(1)"));
        assert!(is_black_url(b"JAVASCRIPT:alert(1);"));
        assert!(is_black_url(b"vbscript:msgbox"));
        assert!(is_black_url(b"data:text/html;base64,x"));
        assert!(is_black_url(b"view-source:http://x"));
        assert!(is_black_url(b"  \t javascript:x"));
        assert!(is_black_url(b"&#106;avascript:x"));
        assert!(!is_black_url(b"http://example.com"));
        assert!(!is_black_url(b"/relative/path"));
        assert!(!is_black_url(b"&#"));
    }
}

mod detection {
    use crate::is_xss;

    #[test]
    fn script_and_handler_payloads() {
        assert!(is_xss(b"<script>alert(1);</script>"));
        assert!(is_xss(b"<a href=\"JAVASCRIPT:alert(1);\" >"));
        assert!(is_xss(b"onerror=alert(1)>"));
        assert!(is_xss(b"<img src=x onerror=alert(1)>"));
        assert!(is_xss(b"<svg onload=alert(1)>"));
        assert!(is_xss(b"x' onerror='alert(1)"));
        assert!(is_xss(b"<IFRAME src=\"x\">"));
    }

    #[test]
    fn style_and_indirect_attributes() {
        assert!(is_xss(b"<div style=\"x\">"));
        assert!(is_xss(b"<set attributename=\"onload\">"));
    }

    #[test]
    fn doctype_is_always_an_attack() {
        assert!(is_xss(b"<!DOCTYPE html>"));
    }

    #[test]
    fn dangerous_comments() {
        assert!(is_xss(b"<!--[if IE]>--><script>x"));
        assert!(is_xss(b"<!--xml stuff-->"));
        assert!(is_xss(b"<?import namespace>"));
        assert!(is_xss(b"<!-- tick ` inside -->"));
    }

    #[test]
    fn entity_encoded_scheme() {
        assert!(is_xss(b"<a href=\"&#106;avascript:alert(1)\">"));
    }

    #[test]
    fn benign_markup() {
        assert!(!is_xss(b""));
        assert!(!is_xss(b"   "));
        assert!(!is_xss(b"<p>Hello World</p>"));
        assert!(!is_xss(b"plain text"));
        assert!(!is_xss(b"onY29va2llcw=="));
        assert!(!is_xss(b"href=&#"));
        assert!(!is_xss(b"<div class=\"x\">text</div>"));
        assert!(!is_xss(b"<a href=\"http://example.com\">link</a>"));
        assert!(!is_xss(b"a < b and c > d"));
    }
}
