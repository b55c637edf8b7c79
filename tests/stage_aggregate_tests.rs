use stagepipe::*;

#[tokio::test]
async fn test_reduce() {
    let result = iota(1, 10, 1).reduce(|a, b| a + b).pop().await;
    assert_eq!(result, Ok(45));
}

#[tokio::test]
async fn test_reduce_emits_exactly_one_value() {
    let result = iota(1, 10, 1).reduce(|a, b| a.max(b)).collect_vec().await;
    assert_eq!(result, vec![9]);
}

#[tokio::test]
async fn test_reduce_empty_is_empty_stream() {
    let mut reduced = iota(0, 0, 1).reduce(|a, b| a + b);
    assert_eq!(reduced.pop().await, Err(StreamError::EmptyStream));
    // and keeps saying so
    assert_eq!(reduced.pop().await, Err(StreamError::EmptyStream));
}

#[tokio::test]
async fn test_last() {
    let result = iota(1, 10, 1).last().pop().await;
    assert_eq!(result, Ok(9));
}

#[tokio::test]
async fn test_last_empty_is_empty_stream() {
    let result = from_chars("").last().pop().await;
    assert_eq!(result, Err(StreamError::EmptyStream));
}

#[tokio::test]
async fn test_tail() {
    let result = iota(1, 21, 1).tail(3).collect_vec().await;
    assert_eq!(result, vec![18, 19, 20]);
}

#[tokio::test]
async fn test_tail_shorter_than_window() {
    let result = iota(1, 3, 1).tail(5).collect_vec().await;
    assert_eq!(result, vec![1, 2]);
}

#[tokio::test]
async fn test_tail_of_strings() {
    let result = from_string("a b c d", " ").tail(2).collect_vec().await;
    assert_eq!(result, vec!["c", "d"]);
}

#[tokio::test]
async fn test_euler_1() {
    let result = iota(0, 1000, 1)
        .filter(|n| n % 3 == 0 || n % 5 == 0)
        .reduce(|a, b| a + b)
        .pop()
        .await;
    assert_eq!(result, Ok(233168));
}

#[tokio::test]
async fn test_euler_2() {
    let result = fibonacci()
        .until(|n| *n > 4_000_000)
        .filter(|n| n % 2 == 0)
        .reduce(|a, b| a + b)
        .pop()
        .await;
    assert_eq!(result, Ok(4613732));
}

#[tokio::test]
async fn test_tail_larger_than_any_input() {
    let result = iota(1, 21, 1).tail(usize::MAX).collect_vec().await;
    assert_eq!(result, (1..21).collect::<Vec<i64>>());
}
