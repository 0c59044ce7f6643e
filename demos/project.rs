//! Writing a minimal `project.pbxproj` from typed Rust structs.
//!
//! Run with: cargo run --example project

use serde::Serialize;
use serde_pbxproj::{to_value, CommentedString, Document, PlistMap, PlistOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct BuildFile {
    isa: &'static str,
    #[serde(rename = "fileRef")]
    file_ref: CommentedString,
}

#[derive(Debug, Serialize)]
struct FileReference {
    isa: &'static str,
    #[serde(rename = "lastKnownFileType")]
    last_known_file_type: &'static str,
    path: String,
    #[serde(rename = "sourceTree")]
    source_tree: &'static str,
}

#[derive(Debug, Serialize)]
struct Group {
    isa: &'static str,
    children: Vec<CommentedString>,
    #[serde(rename = "sourceTree")]
    source_tree: &'static str,
}

#[derive(Debug, Serialize)]
struct ShellScriptBuildPhase {
    isa: &'static str,
    #[serde(rename = "buildActionMask")]
    build_action_mask: u32,
    files: Vec<CommentedString>,
    name: String,
    #[serde(rename = "runOnlyForDeploymentPostprocessing")]
    run_only_for_deployment_postprocessing: u8,
    #[serde(rename = "shellPath")]
    shell_path: &'static str,
    #[serde(rename = "shellScript")]
    shell_script: CommentedString,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut objects = PlistMap::new();
    let mut children = Vec::new();

    for (i, path) in ["AppDelegate.swift", "Main View.swift"].iter().enumerate() {
        let file_ref = CommentedString::new(format!("F{:023}", i)).with_comment(*path);

        objects.insert(
            CommentedString::new(format!("B{:023}", i)).with_comment(format!("{} in Sources", path)),
            to_value(&BuildFile {
                isa: "PBXBuildFile",
                file_ref: file_ref.clone(),
            })?,
        );
        objects.insert(
            file_ref.clone(),
            to_value(&FileReference {
                isa: "PBXFileReference",
                last_known_file_type: "sourcecode.swift",
                path: path.to_string(),
                source_tree: "<group>",
            })?,
        );
        children.push(file_ref);
    }

    objects.insert(
        CommentedString::new("G00000000000000000000000"),
        to_value(&Group {
            isa: "PBXGroup",
            children,
            source_tree: "<group>",
        })?,
    );
    objects.insert(
        CommentedString::new("S00000000000000000000000").with_comment("SwiftLint"),
        to_value(&ShellScriptBuildPhase {
            isa: "PBXShellScriptBuildPhase",
            build_action_mask: 2147483647,
            files: vec![],
            name: "SwiftLint".to_string(),
            run_only_for_deployment_postprocessing: 0,
            shell_path: "/bin/sh",
            shell_script: CommentedString::new(
                "if which swiftlint >/dev/null; then\n\tswiftlint\nfi\n",
            )
            .with_special_flag(true),
        })?,
    );

    let document = Document::new(
        objects,
        CommentedString::new("P00000000000000000000000").with_comment("Project object"),
    );

    // Xcode's layout: sections per class, build files on one line
    println!("{}", document.encode());

    // One object per block, no section markers
    println!("{}", document.encode_with_options(PlistOptions::flat()));

    Ok(())
}
