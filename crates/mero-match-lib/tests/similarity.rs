use mero_match::{cosine_similarity, find_best_match, MatchError, Profile};

fn profile(id: u64, vector: &[f64]) -> Profile {
    Profile {
        id,
        personality_vector: vector.to_vec(),
        interests: Vec::new(),
    }
}

#[test]
fn identical_vectors_score_one() {
    for v in [
        vec![0.8, 0.2, 0.6, 0.3, 0.1],
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.5, 0.5, 0.5, 0.5, 0.5],
        vec![3.0, -2.0, 7.5, 0.0, 1.0],
    ] {
        let s = cosine_similarity(&v, &v).expect("same length");
        assert!((s - 1.0).abs() < 1e-12, "{v:?} scored {s}");
    }
}

#[test]
fn similarity_is_symmetric() {
    let a = [0.8, 0.2, 0.6, 0.3, 0.1];
    let b = [0.1, 0.9, 0.4, 0.7, 0.5];
    let ab = cosine_similarity(&a, &b).unwrap();
    let ba = cosine_similarity(&b, &a).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn orthogonal_and_opposite_vectors() {
    let x = [1.0, 0.0, 0.0, 0.0, 0.0];
    let y = [0.0, 1.0, 0.0, 0.0, 0.0];
    let neg_x = [-1.0, 0.0, 0.0, 0.0, 0.0];
    assert_eq!(cosine_similarity(&x, &y).unwrap(), 0.0);
    assert!((cosine_similarity(&x, &neg_x).unwrap() + 1.0).abs() < 1e-12);
}

// A zero vector carries no signal: it scores 0.0 against everything,
// including another zero vector, rather than producing NaN.
#[test]
fn zero_vector_scores_zero_not_nan() {
    let zero = [0.0; 5];
    for other in [[0.8, 0.2, 0.6, 0.3, 0.1], [1.0, 0.0, 0.0, 0.0, 0.0], [0.0; 5]] {
        let s = cosine_similarity(&zero, &other).unwrap();
        assert_eq!(s, 0.0);
        assert_eq!(cosine_similarity(&other, &zero).unwrap(), 0.0);
    }
}

#[test]
fn mismatched_lengths_are_reported() {
    let five = [0.1, 0.2, 0.3, 0.4, 0.5];
    let three = [0.1, 0.2, 0.3];
    assert_eq!(
        cosine_similarity(&five, &three),
        Err(MatchError::DimensionMismatch { left: 5, right: 3 })
    );
    // Still an error when the shorter side is all zeros.
    assert!(cosine_similarity(&[0.0; 3], &five).is_err());
}

#[test]
fn no_candidates_means_no_match() {
    let target = profile(1, &[0.8, 0.2, 0.6, 0.3, 0.1]);
    assert_eq!(find_best_match(&target, &[]).unwrap(), None);
}

#[test]
fn ties_resolve_to_first_candidate() {
    let target = profile(10, &[1.0, 0.0, 0.0, 0.0, 0.0]);
    // Same direction gives the same score regardless of magnitude.
    let c1 = profile(1, &[0.9, 0.43588989435406733, 0.0, 0.0, 0.0]);
    let c2 = profile(2, &[1.8, 0.8717797887081347, 0.0, 0.0, 0.0]);
    let c3 = profile(3, &[0.5, 0.8660254037844386, 0.0, 0.0, 0.0]);

    let s1 = cosine_similarity(&target.personality_vector, &c1.personality_vector).unwrap();
    let s2 = cosine_similarity(&target.personality_vector, &c2.personality_vector).unwrap();
    assert_eq!(s1, s2);

    let best = find_best_match(&target, &[c1, c2, c3]).unwrap().expect("match");
    assert_eq!(best.profile.id, 1);
    assert!((best.score - 0.9).abs() < 1e-9);
}

#[test]
fn exact_ties_keep_first_in_iteration_order() {
    let target = profile(9, &[0.8, 0.2, 0.6, 0.3, 0.1]);
    let candidates = vec![
        profile(3, &[0.1, 0.1, 0.1, 0.1, 0.1]),
        profile(5, &[0.8, 0.2, 0.6, 0.3, 0.1]),
        profile(7, &[0.8, 0.2, 0.6, 0.3, 0.1]),
    ];
    let best = find_best_match(&target, &candidates).unwrap().unwrap();
    assert_eq!(best.profile.id, 5);
}

#[test]
fn negative_scores_still_produce_a_match() {
    let target = profile(3, &[1.0, 0.0, 0.0, 0.0, 0.0]);
    let candidates = vec![
        profile(1, &[-1.0, 0.0, 0.0, 0.0, 0.0]),
        profile(2, &[-1.0, -1.0, 0.0, 0.0, 0.0]),
    ];
    let best = find_best_match(&target, &candidates).unwrap().unwrap();
    assert_eq!(best.profile.id, 2);
    assert!(best.score < 0.0);
}

#[test]
fn zero_score_candidate_beats_empty_result() {
    let target = profile(2, &[0.0; 5]);
    let candidates = vec![profile(1, &[1.0, 0.0, 0.0, 0.0, 0.0])];
    let best = find_best_match(&target, &candidates).unwrap().unwrap();
    assert_eq!(best.profile.id, 1);
    assert_eq!(best.score, 0.0);
}

#[test]
fn mismatch_in_any_candidate_fails_the_search() {
    let target = profile(4, &[0.8, 0.2, 0.6, 0.3, 0.1]);
    let candidates = vec![
        profile(1, &[0.8, 0.2, 0.6, 0.3, 0.1]),
        profile(2, &[0.1, 0.2, 0.3]),
    ];
    assert_eq!(
        find_best_match(&target, &candidates),
        Err(MatchError::DimensionMismatch { left: 5, right: 3 })
    );
}

#[test]
fn huge_magnitudes_do_not_overflow() {
    let big = [1e200, 0.0, 0.0, 0.0, 0.0];
    let unit = [1.0, 0.0, 0.0, 0.0, 0.0];
    let self_sim = cosine_similarity(&big, &big).unwrap();
    assert!((self_sim - 1.0).abs() < 1e-12, "scored {self_sim}");
    assert!((cosine_similarity(&big, &unit).unwrap() - 1.0).abs() < 1e-12);

    let all_big = [1e300; 5];
    assert!((cosine_similarity(&all_big, &all_big).unwrap() - 1.0).abs() < 1e-12);
    let mixed = cosine_similarity(&[1e200, 2e200, 0.0, 0.0, 0.0], &[1.0, 2.0, 0.0, 0.0, 0.0])
        .unwrap();
    assert!((mixed - 1.0).abs() < 1e-12);
}

#[test]
fn tiny_magnitudes_do_not_underflow_to_zero() {
    let tiny = [1e-200, 1e-200, 0.0, 0.0, 0.0];
    let ones = [1.0, 1.0, 0.0, 0.0, 0.0];
    let s = cosine_similarity(&tiny, &ones).unwrap();
    assert!((s - 1.0).abs() < 1e-12, "scored {s}");
}

#[test]
fn huge_candidates_still_produce_a_match() {
    let target = profile(3, &[1e200, 0.0, 0.0, 0.0, 0.0]);
    let candidates = vec![
        profile(1, &[1e200, 0.0, 0.0, 0.0, 0.0]),
        profile(2, &[0.0, 1e200, 0.0, 0.0, 0.0]),
    ];
    let best = find_best_match(&target, &candidates).unwrap().expect("non-empty candidates");
    assert_eq!(best.profile.id, 1);
    assert!(best.score.is_finite());
    assert!((best.score - 1.0).abs() < 1e-12);
}
