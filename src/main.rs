//! Command-line interface for wakachi-rs
//!
//! Usage:
//!   wakachi [OPTIONS] <TEXT>
//!   echo "猫が魚を食べました" | wakachi -d dictionary.tsv
//!
//! Options:
//!   -d, --dict <FILE>   Path to dictionary TSV file
//!   -n, --names <FILE>  Path to names dictionary file
//!   -j, --json          Output as JSON
//!   -h, --help          Show help

use std::env;
use std::fs;
use std::io::{self, BufRead};
use unicode_normalization::UnicodeNormalization;
use wakachi_rs::{Lexer, NameDictionary, Token, WordIndexBuilder};

fn print_help() {
    eprintln!(
        r#"wakachi-rs - A dictionary-based Japanese tokenizer

USAGE:
    wakachi [OPTIONS] [TEXT]
    echo "猫が魚を食べました" | wakachi -d dictionary.tsv

OPTIONS:
    -d, --dict <FILE>   Path to dictionary TSV file
    -n, --names <FILE>  Path to names dictionary file
    -j, --json          Output as JSON
    -h, --help          Show this help message

EXAMPLES:
    wakachi -d dictionary.tsv "猫が魚を食べました"
    wakachi -d dictionary.tsv -n names.txt -j "田中さんです"
    echo "猫が魚を食べました" | wakachi -d dictionary.tsv
"#
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dict_path: Option<String> = None;
    let mut names_path: Option<String> = None;
    let mut json_output = false;
    let mut text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-j" | "--json" => {
                json_output = true;
            }
            "-d" | "--dict" => {
                i += 1;
                if i < args.len() {
                    dict_path = Some(args[i].clone());
                } else {
                    eprintln!("Error: --dict requires a file path");
                    std::process::exit(1);
                }
            }
            "-n" | "--names" => {
                i += 1;
                if i < args.len() {
                    names_path = Some(args[i].clone());
                } else {
                    eprintln!("Error: --names requires a file path");
                    std::process::exit(1);
                }
            }
            arg if !arg.starts_with('-') => {
                text = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read from stdin if no text provided
    let input_text = if let Some(t) = text {
        t
    } else {
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => lines.push(l),
                Err(e) => {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
        lines.join("\n")
    };

    if input_text.is_empty() {
        eprintln!("Error: No input text provided");
        print_help();
        std::process::exit(1);
    }

    // terminal input may arrive decomposed; normalize at the boundary so
    // dictionary lookups see NFC
    let input_text: String = input_text.nfc().collect();

    // Build the index
    let mut builder = WordIndexBuilder::new();
    if let Some(path) = dict_path {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading dictionary file '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        if let Err(e) = builder.load_tsv(&content) {
            eprintln!("Error loading dictionary '{}': {}", path, e);
            std::process::exit(1);
        }
    }
    if let Some(path) = names_path {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading names file '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        match NameDictionary::parse(&content) {
            Ok(names) => builder.names(names),
            Err(e) => {
                eprintln!("Error loading names '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }

    let mut lexer = Lexer::new(builder.build());
    let tokens = lexer.tokenize(&input_text);

    // Output
    if json_output {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for token in &tokens {
            match token {
                Token::Word { text, entries } => {
                    let readings: Vec<String> =
                        entries.iter().map(|entry| entry.reading()).collect();
                    println!("{}\tWORD\t{}", text, readings.join(";"));
                }
                Token::Unknown { text } => println!("{}\tUNKNOWN\t", text),
                Token::Kana { text } => println!("{}\tKANA\t", text),
                Token::Other { text } => println!("{}\tOTHER\t", text),
            }
        }
    }
}
