// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, ~~struck~~ and `code` plus a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted reply\n> over two lines\n\n| Name | Value |\n|------|------:|\n| a | 1 |\n| b | 2 |\n\n---\n\n```rust main.rs\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(runs: usize) -> String {
    let mut content = String::new();
    for i in 0..runs {
        content.push_str(&format!(
            "word{i} **b{i}** _i{i}_ ~~s{i}~~ `c{i}` [l{i} **x**](u{i}) "
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_code_lines(lines: usize) -> Vec<String> {
    let base = [
        "pub fn handle(req: Request) -> Result<Response, Error> {",
        "    let count = 0x1F + 3.5e2; // mixed numbers",
        "    /* inline block */ println!(\"value: {}\", count);",
        "    <div class=\"tag\">...</div>",
        "}",
    ];
    base.iter()
        .cycle()
        .take(lines)
        .map(|s| s.to_string())
        .collect()
}
