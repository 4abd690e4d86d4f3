//! Demonstrates reacting to a streamed LLM tool call while it is still
//! arriving.
//!
//! The assistant has been prompted with a tool schema that yields a JSON
//! object describing a generated code snippet:
//!
//! ```text
//! {
//!   "decision": "allow" | "block",
//!   "filename": string,
//!   "language": string,
//!   "code":     string,
//! }
//! ```
//!
//! The example streams a *single* JSON document but feeds it to the parser in
//! small, irregular chunks to mirror how `chat.completions`-style APIs deliver
//! partial tokens.  Two things happen while the payload arrives:
//!
//! 1. As soon as the `decision` value prefixes to `"block"` we abort
//!    processing and surface an error to the caller, before the rest of the
//!    response has even finished.
//! 2. Each fragment of the `code` string is printed to `stdout` as soon as it
//!    becomes available so that a user interface could render the snippet
//!    character-by-character.
//!
//! Run with
//!
//! ```bash
//! cargo run -p fieldstream --example llm_tool_call
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use fieldstream::{FieldEvent, FieldParser, ParserOptions};

fn main() {
    // A toy assistant response streamed in tiny chunks.  The `decision` field
    // comes first so that backend code can decide early whether to continue
    // or abort before the potentially expensive code snippet arrives.  In
    // real life this would come from the network.
    let simulated_stream: [&str; 8] = [
        r#"{"decision":"al"#,
        r#"lo"#,
        r#"w","filename":"example.rs","#,
        r#""language":"rust","#,
        r#""code":"fn main() {\n"#,
        r#"    println!(\"hel"#,
        r#"lo\");\n}\n"#,
        r#""}"#,
    ];

    let mut parser = FieldParser::new(ParserOptions::default());

    // Accumulated prefix of the `decision` string seen so far.
    let mut decision = String::new();
    let mut in_code_field = false;

    for chunk in simulated_stream {
        for event in parser.process(chunk) {
            match event {
                FieldEvent::StringChunk {
                    property,
                    text,
                    is_final,
                } if property == "decision" => {
                    decision.push_str(&text);
                    if decision.starts_with("block") {
                        eprintln!("🚨  Moderation blocked the content, aborting");
                        return;
                    }
                    if is_final {
                        println!("✅  Moderation decision: {decision}");
                    }
                }

                FieldEvent::StringChunk {
                    property,
                    text,
                    is_final,
                } if property == "code" => {
                    // Raw JSON text: escape sequences arrive undecoded.
                    print!("{text}");
                    in_code_field = !is_final;
                }

                FieldEvent::Error { message } => {
                    eprintln!("⚠️  Parse error: {message}");
                }

                _ => {}
            }
        }
    }

    if in_code_field {
        // The stream ended before the closing quote of the code field.
        eprintln!("⚠️  Stream ended before code snippet was complete");
    }

    for event in parser.finalize() {
        if let FieldEvent::Complete { is_valid } = event {
            println!();
            println!("Document complete, valid: {is_valid}");
        }
    }
}
