use stagepipe::*;

async fn groups<T: Send + 'static>(mut chunks: StageOfStages<T>) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    while let Some(chunk) = chunks.recv().await {
        out.push(chunk.collect_vec().await);
    }
    out
}

#[tokio::test]
async fn test_chunk() {
    let result = groups(iota(2, 12, 2).chunk(2)).await;
    assert_eq!(result, vec![vec![2, 4], vec![6, 8], vec![10]]);
}

#[tokio::test]
async fn test_chunk_exact_multiple() {
    let result = groups(iota(2, 18, 2).chunk(4)).await;
    assert_eq!(result, vec![vec![2, 4, 6, 8], vec![10, 12, 14, 16]]);
}

#[tokio::test]
async fn test_chunk_larger_than_input() {
    let result = groups(from_chars("ab").chunk(10)).await;
    assert_eq!(result, vec![vec!['a', 'b']]);
}

#[tokio::test]
async fn test_chunk_of_empty_input() {
    let result = groups(iota(0, 0, 1).chunk(3)).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_chunk_inner_stages_are_settled() {
    let mut chunks = iota(0, 10, 1).chunk(5);
    let first = chunks.recv().await.unwrap();
    let second = chunks.recv().await.unwrap();

    // both groups are closed and complete even though neither was read yet
    assert!(first.is_closed());
    assert!(second.is_closed());
    assert_eq!(second.collect_vec().await, vec![5, 6, 7, 8, 9]);
    assert_eq!(first.collect_vec().await, vec![0, 1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "chunk size must be non-zero")]
fn test_chunk_zero_panics() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let _ = iota(0, 3, 1).chunk(0);
    });
}

#[tokio::test]
async fn test_pad_right() {
    let result = iota(1, 6, 1).pad_right(0, 8).collect_vec().await;
    assert_eq!(result, vec![1, 2, 3, 4, 5, 0, 0, 0]);
}

#[tokio::test]
async fn test_pad_right_exceeded() {
    let result = iota(1, 10, 1).pad_right(0, 8).collect_vec().await;
    assert_eq!(result, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[tokio::test]
async fn test_pad_left() {
    let result = iota(1, 6, 1).pad_left(0, 8).collect_vec().await;
    assert_eq!(result, vec![0, 0, 0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_pad_left_exceeded() {
    let result = iota(1, 10, 1).pad_left(0, 8).collect_vec().await;
    assert_eq!(result, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[tokio::test]
async fn test_pad_left_streams_after_window() {
    // Only the first n values are held back; the rest of an endless source
    // keeps flowing.
    let result = iota(1, i64::MAX, 1).pad_left(0, 3).take(5).collect_vec().await;
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_pad_characters() {
    let result = from_chars("42").pad_left('0', 5).render().await;
    assert_eq!(result, "00042");
    let result = from_chars("ab").pad_right('.', 4).render().await;
    assert_eq!(result, "ab..");
}

#[tokio::test]
async fn test_chunk_larger_than_any_input() {
    let result = groups(iota(1, 4, 1).chunk(usize::MAX)).await;
    assert_eq!(result, vec![vec![1, 2, 3]]);
}

#[tokio::test]
async fn test_pad_left_huge_width_streams_pads() {
    let result = iota(1, 4, 1).pad_left(0, 1 << 62).take(2).collect_vec().await;
    assert_eq!(result, vec![0, 0]);
}
