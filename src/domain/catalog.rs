//! The fixed catalog of text-style presets.
//!
//! Order matters: it is the default display order and the filter never
//! reorders. Only `glitch` layers its text twice and therefore asks for the
//! echo attribute.

use super::style::{Category, StyleDescriptor};

/// Every preset in display order.
pub static CATALOG: &[StyleDescriptor] = &[
    StyleDescriptor {
        id: "neon-glow",
        display_name: "네온 글로우",
        category: Category::Retro,
        category_label: "레트로",
        style_class: "font-neon-glow",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Black Han Sans', sans-serif;
color: #fff;
text-shadow:
    0 0 5px #fff,
    0 0 10px #fff,
    0 0 20px #ff00de,
    0 0 30px #ff00de,
    0 0 40px #ff00de,
    0 0 55px #ff00de,
    0 0 75px #ff00de;"#,
    },
    StyleDescriptor {
        id: "gradient-flow",
        display_name: "그라데이션 플로우",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-gradient-flow",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gothic A1', sans-serif;
font-weight: 900;
background: linear-gradient(90deg, #ff6b6b, #feca57, #48dbfb, #ff9ff3, #ff6b6b);
background-size: 200% auto;
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
animation: gradient-shift 3s linear infinite;

@keyframes gradient-shift {
    0% { background-position: 0% center; }
    100% { background-position: 200% center; }
}"#,
    },
    StyleDescriptor {
        id: "glitch",
        display_name: "사이버펑크 글리치",
        category: Category::Futuristic,
        category_label: "미래적",
        style_class: "font-glitch",
        requires_echo_attribute: true,
        raw_style_code: r#"font-family: 'Do Hyeon', sans-serif;
position: relative;
color: #fff;
/* ::before와 ::after 의사 요소 필요 */
/* RGB 분리 및 글리치 효과 */"#,
    },
    StyleDescriptor {
        id: "retro-sunset",
        display_name: "레트로 선셋",
        category: Category::Retro,
        category_label: "레트로",
        style_class: "font-retro-sunset",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gugi', cursive;
background: linear-gradient(180deg, #ff6a00 0%, #ee0979 50%, #bd00ff 100%);
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
filter: drop-shadow(2px 2px 0 rgba(238, 9, 121, 0.3));"#,
    },
    StyleDescriptor {
        id: "emboss",
        display_name: "3D 엠보스",
        category: Category::ThreeD,
        category_label: "3D",
        style_class: "font-emboss",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Noto Sans KR', sans-serif;
font-weight: 900;
color: #e0e0e0;
text-shadow:
    -1px -1px 1px rgba(255,255,255,0.8),
    1px 1px 1px rgba(0,0,0,0.3),
    2px 2px 2px rgba(0,0,0,0.2),
    3px 3px 3px rgba(0,0,0,0.15);"#,
    },
    StyleDescriptor {
        id: "chalk",
        display_name: "칠판 분필",
        category: Category::Handwriting,
        category_label: "손글씨",
        style_class: "font-chalk",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gaegu', cursive;
font-weight: 700;
color: #fff;
text-shadow:
    0 0 5px #fff,
    0 0 2px rgba(255,255,255,0.8);
filter: blur(0.3px);
letter-spacing: 2px;"#,
    },
    StyleDescriptor {
        id: "gold",
        display_name: "골드 럭셔리",
        category: Category::Classic,
        category_label: "클래식",
        style_class: "font-gold",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Noto Serif KR', serif;
font-weight: 700;
background: linear-gradient(180deg, #f9d423 0%, #e65c00 25%, #f9d423 50%, #e65c00 75%, #f9d423 100%);
background-size: 100% 200%;
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
animation: gold-shine 2s ease infinite;

@keyframes gold-shine {
    0%, 100% { background-position: 0% 0%; }
    50% { background-position: 0% 100%; }
}"#,
    },
    StyleDescriptor {
        id: "comic",
        display_name: "만화 팝",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-comic",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Jua', sans-serif;
color: #ffeb3b;
text-shadow:
    3px 3px 0 #ff5722,
    6px 6px 0 #e91e63,
    -1px -1px 0 #000,
    1px -1px 0 #000,
    -1px 1px 0 #000,
    1px 1px 0 #000;
letter-spacing: 2px;"#,
    },
    StyleDescriptor {
        id: "fire",
        display_name: "불타는 텍스트",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-fire",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Black Han Sans', sans-serif;
color: #fff;
text-shadow:
    0 0 4px #fff,
    0 -5px 4px #ff3,
    2px -10px 6px #fd3,
    -2px -15px 11px #f80,
    2px -25px 18px #f20;
animation: fire-flicker 0.15s infinite alternate;"#,
    },
    StyleDescriptor {
        id: "ice",
        display_name: "얼음 크리스탈",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-ice",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gothic A1', sans-serif;
font-weight: 700;
background: linear-gradient(180deg, #e0f7fa 0%, #80deea 30%, #4dd0e1 70%, #00bcd4 100%);
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
filter: drop-shadow(0 0 8px rgba(77, 208, 225, 0.5));"#,
    },
    StyleDescriptor {
        id: "hologram",
        display_name: "홀로그램",
        category: Category::Futuristic,
        category_label: "미래적",
        style_class: "font-hologram",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Do Hyeon', sans-serif;
background: linear-gradient(45deg, #ff0000, #ff7300, #fffb00, #48ff00, #00ffd5, #002bff, #7a00ff, #ff00c8, #ff0000);
background-size: 400% 400%;
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
animation: hologram-shift 3s ease infinite;"#,
    },
    StyleDescriptor {
        id: "newspaper",
        display_name: "빈티지 신문",
        category: Category::Classic,
        category_label: "클래식",
        style_class: "font-newspaper",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Noto Serif KR', serif;
font-weight: 600;
color: #2c2c2c;
text-shadow: 1px 1px 0 rgba(0,0,0,0.1);
letter-spacing: -1px;"#,
    },
    StyleDescriptor {
        id: "typewriter",
        display_name: "타자기",
        category: Category::Classic,
        category_label: "클래식",
        style_class: "font-typewriter",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Poor Story', cursive;
color: #333;
text-shadow:
    1px 1px 0 rgba(0,0,0,0.2),
    0 0 1px rgba(0,0,0,0.3);
letter-spacing: 1px;"#,
    },
    StyleDescriptor {
        id: "stencil",
        display_name: "스텐실",
        category: Category::Modern,
        category_label: "모던",
        style_class: "font-stencil",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Black Han Sans', sans-serif;
color: transparent;
-webkit-text-stroke: 2px currentColor;
letter-spacing: 4px;"#,
    },
    StyleDescriptor {
        id: "rainbow-shadow",
        display_name: "레인보우 섀도우",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-rainbow-shadow",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Jua', sans-serif;
color: #fff;
text-shadow:
    1px 1px 0 #ff0000,
    2px 2px 0 #ff7700,
    3px 3px 0 #ffdd00,
    4px 4px 0 #00ff00,
    5px 5px 0 #0077ff,
    6px 6px 0 #7700ff,
    7px 7px 0 #ff00ff;"#,
    },
    StyleDescriptor {
        id: "elegant-serif",
        display_name: "우아한 세리프",
        category: Category::Classic,
        category_label: "클래식",
        style_class: "font-elegant-serif",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Noto Serif KR', serif;
font-weight: 400;
letter-spacing: 3px;
font-style: italic;"#,
    },
    StyleDescriptor {
        id: "minimal-sans",
        display_name: "미니멀 산스",
        category: Category::Modern,
        category_label: "모던",
        style_class: "font-minimal-sans",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Noto Sans KR', sans-serif;
font-weight: 300;
letter-spacing: 6px;
text-transform: uppercase;"#,
    },
    StyleDescriptor {
        id: "brush",
        display_name: "붓글씨",
        category: Category::Handwriting,
        category_label: "손글씨",
        style_class: "font-brush",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Nanum Brush Script', cursive;"#,
    },
    StyleDescriptor {
        id: "calligraphy",
        display_name: "캘리그라피",
        category: Category::Handwriting,
        category_label: "손글씨",
        style_class: "font-calligraphy",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Nanum Pen Script', cursive;
letter-spacing: 1px;"#,
    },
    StyleDescriptor {
        id: "sketchy",
        display_name: "스케치",
        category: Category::Handwriting,
        category_label: "손글씨",
        style_class: "font-sketchy",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Hi Melody', cursive;
letter-spacing: 1px;"#,
    },
    StyleDescriptor {
        id: "arcade",
        display_name: "아케이드 픽셀",
        category: Category::Retro,
        category_label: "레트로",
        style_class: "font-arcade",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Do Hyeon', sans-serif;
color: #00ff00;
text-shadow:
    0 0 5px #00ff00,
    0 0 10px #00ff00,
    0 0 15px #00ff00;
letter-spacing: 3px;"#,
    },
    StyleDescriptor {
        id: "deep-shadow",
        display_name: "딥 섀도우",
        category: Category::ThreeD,
        category_label: "3D",
        style_class: "font-deep-shadow",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gothic A1', sans-serif;
font-weight: 900;
color: #fff;
text-shadow:
    1px 1px 0 #ccc,
    2px 2px 0 #c9c9c9,
    3px 3px 0 #bbb,
    4px 4px 0 #b9b9b9,
    5px 5px 0 #aaa,
    6px 6px 1px rgba(0,0,0,.1);"#,
    },
    StyleDescriptor {
        id: "neon-blue",
        display_name: "네온 블루",
        category: Category::Futuristic,
        category_label: "미래적",
        style_class: "font-neon-blue",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Gugi', cursive;
color: #fff;
text-shadow:
    0 0 5px #fff,
    0 0 10px #fff,
    0 0 20px #00b4ff,
    0 0 30px #00b4ff,
    0 0 40px #00b4ff,
    0 0 55px #00b4ff;
animation: neon-pulse 1.5s ease-in-out infinite alternate;"#,
    },
    StyleDescriptor {
        id: "perspective",
        display_name: "원근감",
        category: Category::ThreeD,
        category_label: "3D",
        style_class: "font-perspective",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Black Han Sans', sans-serif;
transform: perspective(500px) rotateX(15deg);
text-shadow:
    0 1px 0 #ccc,
    0 2px 0 #c9c9c9,
    0 3px 0 #bbb,
    0 4px 0 #b9b9b9,
    0 5px 0 #aaa;"#,
    },
    StyleDescriptor {
        id: "watercolor",
        display_name: "수채화",
        category: Category::Art,
        category_label: "아트",
        style_class: "font-watercolor",
        requires_echo_attribute: false,
        raw_style_code: r#"font-family: 'Nanum Myeongjo', serif;
font-weight: 700;
background: linear-gradient(45deg, #ff9a9e 0%, #fecfef 50%, #a18cd1 100%);
-webkit-background-clip: text;
-webkit-text-fill-color: transparent;
background-clip: text;
filter: blur(0.3px);"#,
    },
];

/// Looks up a descriptor by its id.
#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static StyleDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}
