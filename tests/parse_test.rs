use mailcss::block::ConsumedBlock;
use mailcss::tokenizer::{TokenType, Tokenizer};
use mailcss::{parse_css, CssParser, MAX_NESTING};

/// Deepest node in the tree, with the top block at depth 0.
fn max_depth(block: &ConsumedBlock) -> usize {
    let children: &[ConsumedBlock] = match block.function_block() {
        Some(function) => &function.args,
        None => block.children_or_empty(),
    };

    children
        .iter()
        .map(|child| 1 + max_depth(child))
        .max()
        .unwrap_or(0)
}

fn node_count(block: &ConsumedBlock) -> usize {
    let children: &[ConsumedBlock] = match block.function_block() {
        Some(function) => &function.args,
        None => block.children_or_empty(),
    };

    1 + children.iter().map(node_count).sum::<usize>()
}

fn token_count(input: &str) -> usize {
    let mut tokenizer = Tokenizer::new(input);
    let mut count = 0;
    loop {
        count += 1;
        if tokenizer.next_token().token_type == TokenType::Eof {
            return count;
        }
    }
}

// The color corpus the original scanner was validated against.
const COLOR_CORPUS: &[&str] = &[
    "p { color: rgb(100%, 50%, 0%); opacity: -1; width: 1em; display: none; } /* very transparent solid orange */",
    "p { color: rgb(100%, 50%, 0%); opacity: 2; display: inline; } /* very transparent solid orange */",
    "p { color: rgb(100%, 50%, 0%); opacity: 0.5; } /* very transparent solid orange */\n",
    "p { color: rgb(100%, 50%, 0%); opacity: 1; width: 99%; } /* very transparent solid orange */\n",
    "p { color: rgb(100%, 50%, 0%); opacity: 10%; width: 99%; } /* very transparent solid orange */\n",
    "p { color: rgb(100%, 50%, 0%); opacity: 10%; width: 100px; } /* very transparent solid orange */\n",
    "p { color: rgb(100%, 50%, 0%); opacity: 10% } /* very transparent solid orange */\n",
    "* { color: hsl(0, 100%, 50%) !important }   /* red */\n",
    "* { color: hsl(120, 100%, 50%) important } /* lime */\n",
    "* { color: hsl(120, 100%, 25%) } /* dark green */\n",
    "* { color: hsl(120, 100%, 75%) } /* light green */\n",
    "* { color: hsl(120, 75%, 75%) }  /* pastel green, and so on */\n",
    "em { color: #f00 }              /* #rgb */\n",
    "em { color: #ff0000 }           /* #rrggbb */\n",
    "em { color: rgb(255,0,0) }\n",
    "em { color: rgb(100%, 0%, 0%) }\n",
    "body {color: black; background: white }\n",
    "h1 { color: maroon }\n",
    "h2 { color: olive }\n",
    "em { color: rgb(255,0,0) }       /* integer range 0 - 255 */\n",
    "em { color: rgb(300,0,0) }       /* clipped to rgb(255,0,0) */\n",
    "em { color: rgb(255,-10,0) }     /* clipped to rgb(255,0,0) */\n",
    "em { color: rgb(110%, 0%, 0%) }  /* clipped to rgb(100%,0%,0%) */\n",
    "em { color: rgb(255,0,0) }      /* integer range 0 - 255 */\n",
    "em { color: rgba(255,0,0,1)     /* the same, with explicit opacity of 1 */\n",
    "em { color: rgb(100%,0%,0%) }   /* float range 0.0% - 100.0% */\n",
    "em { color: rgba(100%,0%,0%,1) } /* the same, with explicit opacity of 1 */\n",
    "p { color: rgba(0,0,255,0.5) }        /* semi-transparent solid blue */\n",
    "p { color: rgba(100%, 50%, 0%, 0.1) } /* very transparent solid orange */",
];

#[test]
fn parse_color_corpus() {
    for case in COLOR_CORPUS {
        assert!(parse_css(case).is_ok(), "failed to parse: {}", case);
    }
}

#[test]
fn corpus_colors_are_resolved() {
    let sheet = parse_css("em { color: rgb(300,0,0) }").unwrap();
    let color = sheet.rules()[0]
        .declarations
        .get("color")
        .unwrap()
        .value
        .to_color()
        .unwrap();
    assert_eq!((color.r, color.g, color.b), (255.0, 0.0, 0.0));
}

#[test]
fn debug_serialization_is_stable() {
    for case in COLOR_CORPUS {
        let mut parser = CssParser::new(case);
        let top = parser.consume_css_blocks();

        let first = top.debug_str();
        let second = top.debug_str();
        assert_eq!(first, second);

        // the skeleton mentions every node exactly once
        assert_eq!(first.matches(r#""type": "#).count(), node_count(&top));
    }
}

#[test]
fn structural_depth_is_bounded() {
    let inputs = [
        "p { color: red }".to_string(),
        "p ".to_string() + &"{ a ".repeat(64),
        "(".repeat(19),
        "[".repeat(200),
        "f(g(h(".repeat(40),
    ];

    for input in &inputs {
        let mut parser = CssParser::new(input);
        let top = parser.consume_css_blocks();
        assert!(
            max_depth(&top) <= MAX_NESTING,
            "depth exceeded for: {}",
            input
        );
    }
}

#[test]
fn node_count_is_bounded_by_token_count() {
    let inputs = [
        "p { color: red }",
        "@media print { p { x: 1 } } em { color: #f00 }",
        "a;b;c;d { e: f } ;;;",
        "x(1,2,3) [y] {z}",
    ];

    for input in &inputs {
        let mut parser = CssParser::new(input);
        let top = parser.consume_css_blocks();
        assert!(
            node_count(&top) <= token_count(input) + 1,
            "node bound exceeded for: {}",
            input
        );
    }
}

#[test]
fn adversarial_inputs_do_not_crash() {
    let mut inputs = vec![
        "{".repeat(1000),
        "}".repeat(1000),
        ")]}'\u{0000}\u{0007}".repeat(100),
        "@@@@@@;;;;####".to_string(),
        "p { color: ".to_string() + &"rgb(".repeat(50),
        "/*".to_string(),
        "url(".to_string(),
        "\"unterminated".to_string(),
        "\\".to_string(),
        "u+1?2-3".to_string(),
        "<!--<!--<!--".to_string(),
    ];

    // pseudo-random token soup, deterministic so failures reproduce
    let alphabet = "pq{}()[]#.:;,!@\"'\\ \n*-+0123456789%em".as_bytes();
    let mut state = 0x2545f491u32;
    let mut soup = String::new();
    while soup.len() < 0x10000 {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        soup.push(alphabet[(state >> 16) as usize % alphabet.len()] as char);
    }
    inputs.push(soup);

    for input in &inputs {
        // either a sheet or a typed error; never a panic
        let _ = parse_css(input);

        let mut parser = CssParser::new(input);
        let top = parser.consume_css_blocks();
        assert!(max_depth(&top) <= MAX_NESTING);
    }
}

#[test]
fn eof_tolerance_scenarios() {
    // unbalanced closers, unterminated functions and blocks all succeed
    assert!(parse_css("p { color: red }}}}").is_ok());
    assert!(parse_css("p { color: rgb(1, 2").is_ok());
    assert!(parse_css("p { color: red").is_ok());
}
