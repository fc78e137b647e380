//! Golden snapshot tests for codegen
//!
//! These tests generate both C++ artifacts from `.txt` tag-set files and
//! compare the output against inline snapshots. This ensures codegen changes
//! are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use tagc::backend::{EmitConfig, generate_artifacts};

/// Generate both artifacts from tag-set source
fn generate_cpp(source: &str, config: &EmitConfig) -> (String, String) {
    let artifacts = generate_artifacts(source, config).expect("generation failed");
    (
        String::from_utf8(artifacts.declarations).expect("declarations are UTF-8"),
        String::from_utf8(artifacts.definitions).expect("definitions are UTF-8"),
    )
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.txt", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_sorted_ranks_codegen() {
    let (header, source) = generate_cpp(&load_test_file("sorted_ranks"), &EmitConfig::default());
    insta::assert_snapshot!(header, @r#"
// Generated by tagc. Do not edit.
#pragma once
#include "util/TagDict.h"

namespace Tags
{

const int Lettera = 0;
const int Letterb = 1;
const int Letterc = 2;
const int LetterCOUNT = 3;
extern TagDict<3> LettertagDict;

} // end namespace
"#);
    insta::assert_snapshot!(source, @r#"
// Generated by tagc. Do not edit.
#include "tags.h"

TagDict<3> Tags::LettertagDict({
    "a",
    "b",
    "c",
});
"#);
}

#[test]
fn test_sets_keep_input_order_and_share_tags() {
    let (header, source) = generate_cpp(&load_test_file("shared_tags"), &EmitConfig::default());
    insta::assert_snapshot!(header, @r#"
// Generated by tagc. Do not edit.
#pragma once
#include "util/TagDict.h"

namespace Tags
{

const int ShapeX = 0;
const int Shapecircle = 1;
const int Shapesquare = 2;
const int ShapeCOUNT = 3;
extern TagDict<3> ShapetagDict;

const int ColorX = 0;
const int Colorred = 1;
const int ColorCOUNT = 2;
extern TagDict<2> ColortagDict;

} // end namespace
"#);
    insta::assert_snapshot!(source, @r#"
// Generated by tagc. Do not edit.
#include "tags.h"

TagDict<3> Tags::ShapetagDict({
    "X",
    "circle",
    "square",
});

TagDict<2> Tags::ColortagDict({
    "X",
    "red",
});
"#);
}

#[test]
fn test_aux_fields_are_not_emitted() {
    let (header, source) = generate_cpp(&load_test_file("aux_fields"), &EmitConfig::default());
    assert!(!header.contains("metres"));
    assert!(!source.contains("metres"));
    insta::assert_snapshot!(source, @r#"
// Generated by tagc. Do not edit.
#include "tags.h"

TagDict<3> Tags::UnittagDict({
    "gram",
    "metre",
    "second",
});
"#);
}

#[test]
fn test_custom_names_codegen() {
    let config = EmitConfig::new()
        .with_namespace("Ids")
        .with_table_type("Lookup")
        .with_table_suffix("Table")
        .with_count_suffix("Size")
        .with_table_include("lookup.hpp")
        .with_header_include("ids.hpp");
    let (header, source) = generate_cpp("Dir { up down }", &config);
    insta::assert_snapshot!(header, @r#"
// Generated by tagc. Do not edit.
#pragma once
#include "lookup.hpp"

namespace Ids
{

const int Dirdown = 0;
const int Dirup = 1;
const int DirSize = 2;
extern Lookup<2> DirTable;

} // end namespace
"#);
    insta::assert_snapshot!(source, @r#"
// Generated by tagc. Do not edit.
#include "ids.hpp"

Lookup<2> Ids::DirTable({
    "down",
    "up",
});
"#);
}

#[test]
fn test_empty_input_codegen() {
    let (header, source) = generate_cpp("", &EmitConfig::default());
    insta::assert_snapshot!(header, @r#"
// Generated by tagc. Do not edit.
#pragma once
#include "util/TagDict.h"

namespace Tags
{

} // end namespace
"#);
    insta::assert_snapshot!(source, @r#"
// Generated by tagc. Do not edit.
#include "tags.h"
"#);
}
