use stagepipe::*;
use tokio::runtime::Runtime;

// Pick every third word, keep two of them and join them into one line
fn main() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let text = "Lorem adipiscing elit ipsum sed neque dolor non libero sit consequat magna amet placerat bibendum";

        let joined = from_string(text, " ")
            .stride(3)
            .take(2)
            .reduce(|a, b| format!("{} {}", a, b));

        let mut stdout = tokio::io::stdout();
        match joined.write_to(&mut stdout).await {
            Ok(bytes) => println!("\n({} bytes written)", bytes),
            Err(e) => eprintln!("write failed: {}", e),
        }

        // Numbered words
        let mut numbered = from_string(text, " ").take(5).enumerate(1);
        while let Some(entry) = numbered.recv().await {
            println!("{}: {}", entry.index, entry.value);
        }
    });
}
