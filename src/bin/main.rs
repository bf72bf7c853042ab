use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use translit_core::{
    DictionaryEditor, Direction, TranslatorSession, TranslitEngine, UnknownTokenMode,
};

const DICTIONARY_PATH: &str = "user_dictionary.bin";

fn main() {
    let engine = TranslitEngine::from_file_or_new(DICTIONARY_PATH);
    let mut session = TranslatorSession::new();

    println!("{}", "Myanglish Smart Translit. Type 'exit' to save and quit.".bold());
    println!("---------------------------------------------------------------");
    println!("Commands: :swap  :mode <0|1|2>  :add <word> <translation>  :edit <word> <translation>  :list");

    loop {
        print_prompt(&session);

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            ":swap" => {
                session.swap();
            }
            ":list" => {
                let direction = current_direction(&session);
                let entries = engine.dictionary.list(direction);
                if entries.is_empty() {
                    println!("(dictionary is empty for this direction)");
                }
                for entry in entries {
                    println!("  {} => {}", entry.source_word, entry.translation);
                }
            }
            s if s.starts_with(":mode") => {
                let raw = s[5..].trim().parse::<u32>().unwrap_or(0);
                session.options.unknown_token_mode = UnknownTokenMode::from_u32(raw);
                println!("Unknown-token mode: {:?}", session.options.unknown_token_mode);
            }
            s if s.starts_with(":add ") => {
                run_edit_command(&engine, &session, &s[5..], false);
            }
            s if s.starts_with(":edit ") => {
                run_edit_command(&engine, &session, &s[6..], true);
            }
            s => {
                session.source_text = s.to_string();
                session.translate(&engine);
                println!("\n{}", session.translated_text.clone().bold().green());
                if !session.unresolved_tokens.is_empty() {
                    println!(
                        "{} {}",
                        "Unresolved:".dark_yellow(),
                        session.unresolved_tokens.join(", ")
                    );
                }
            }
        }
    }

    println!("\nSaving dictionary...");
    if let Err(e) = engine.save_dictionary() {
        eprintln!("[ERROR] Could not save dictionary: {}", e);
    } else {
        println!("Dictionary saved to '{}'", DICTIONARY_PATH);
    }
}

fn current_direction(session: &TranslatorSession) -> Direction {
    Direction::between(session.source_language.code, session.target_language.code)
        .unwrap_or(Direction::MyanglishToBurmese)
}

fn run_edit_command(engine: &TranslitEngine, session: &TranslatorSession, args: &str, edit: bool) {
    let mut parts = args.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("");
    let translation = parts.next().unwrap_or("");
    let direction = current_direction(session);

    let result = if edit {
        DictionaryEditor.edit_entry(&engine.dictionary, word, translation, direction)
    } else {
        DictionaryEditor.add_entry(&engine.dictionary, word, translation, direction)
    };

    match result {
        Ok(()) => println!("{}", "ok".green()),
        Err(e) => println!("{} {}", "error:".red(), e),
    }
}

fn print_prompt(session: &TranslatorSession) {
    println!(
        "\n[{} → {}]",
        session.source_language.display_name.cyan(),
        session.target_language.display_name.cyan()
    );
    print!("> ");
    let _ = stdout().flush();
}
