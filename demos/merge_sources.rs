use stagepipe::*;
use tokio::runtime::Runtime;

fn main() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        // Concatenate
        chain(vec![
            from_chars("Lorem ipsum"),
            from_chars(" dolor"),
            from_chars(" sit amet"),
        ])
        .print()
        .await;

        // Zip stops with the shortest source
        zip(vec![
            from_chars("0123"),
            from_chars("abcdefg"),
            from_chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        ])
        .print()
        .await;

        // Round-robin keeps going until every source is exhausted
        round_robin(vec![
            from_chars("0123456789"),
            from_chars("abcdefgh"),
            from_chars("ABCDE"),
        ])
        .print()
        .await;

        // Groups of four, each printed as its own list
        let mut groups = iota(2, 20, 2).chunk(4);
        while let Some(group) = groups.recv().await {
            group.print().await;
        }

        // Sum of the first ten primes, padded sequences
        match primes().take(10).reduce(|a, b| a + b).pop().await {
            Ok(sum) => println!("sum of first ten primes: {}", sum),
            Err(e) => eprintln!("{}", e),
        }
        iota(1, 6, 1).pad_left(0, 8).print().await;
        iota(1, 6, 1).pad_right(0, 8).print().await;
    });
}
