//! How strings are quoted and escaped.
//!
//! Run with: cargo run --example escaping

use serde_pbxproj::{plist, CommentedString};

fn main() {
    let samples = [
        "main.swift",
        "Main View.swift",
        "$(SRCROOT)/Info.plist",
        "say \"hi\"",
        "C:\\path",
        "",
        "true",
        "false",
        "\u{1}",
        "bell\u{7}",
        "马旭",
    ];

    for sample in samples.iter() {
        let raw = format!("{:?}", sample);
        println!("{:<24} => {}", raw, CommentedString::new(*sample).valid_string());
    }

    // Script text escapes tabs and newlines
    let script = "\tcd \"$SRCROOT\"\n\tmake\n";
    println!();
    println!("plain:  {}", CommentedString::new(script).valid_string());
    println!(
        "script: {}",
        CommentedString::new(script).with_special_flag(true).valid_string()
    );

    // Comments follow the value they describe
    let settings = plist!({
        "mainGroup": (CommentedString::new("G1").with_comment("Main Group")),
        "OTHER_LDFLAGS": ["\u{1}", "-ObjC"],
        "ENABLE_BITCODE": false
    });
    println!();
    println!("{}", settings);
}
