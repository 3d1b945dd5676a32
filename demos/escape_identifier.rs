use media_ident::{escape_as_identifier, unescape_identifier};
use std::io::Write;

fn show(name: &[u8]) {
    let escaped = escape_as_identifier(name);
    println!("[!] {}", escaped);

    match unescape_identifier(&escaped) {
        Ok(decoded) => println!("[!] {:?}", String::from_utf8_lossy(&decoded)),
        Err(error) => println!("Error decoding the identifier. ({})", error),
    }
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        for arg in args {
            show(arg.as_bytes());
        }

        return Ok(());
    }

    loop {
        let line = {
            print!("Enter a name (or \"exit\"): ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            line.trim_end_matches(&['\r', '\n'][..]).to_owned()
        };

        if line == "exit" {
            break;
        }

        show(line.as_bytes());
    }

    Ok(())
}
