// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n* Bullet point\n* Another item\n\n> A quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n$$\nx^2\n$$\n\n:::info\nA note\n:::\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_rst_content(size: usize) -> String {
    let base = "Title\n=====\n\nSection\n-------\n\nParagraph with some content.\n\n* Bullet point\n* Another item\n\n    A quote\n\n.. code-block:: rust\n\n   fn example() {\n       println!(\"Hello\");\n   }\n\n.. math::\n\n   x^2\n\n.. note::\n\n   A note\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str("Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n\n");
        for i in 0..3 {
            content.push_str(&format!("* Item {i} in section {section}\n"));
        }
        content.push('\n');
        if section % 3 == 0 {
            content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n}\n```\n\n");
        }
    }

    content
}
