//! 启动时的交互问答

use std::io::{self, BufRead, Write};

/// 回答是否为 "y"（忽略大小写与首尾空白）
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// 询问是否使用代理，只有回答 y 时启用
pub fn ask_use_proxy() -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ask(&mut stdin.lock(), &mut stdout, "是否使用代理? (y/n): ")
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<bool> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}
