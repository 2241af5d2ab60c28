use crate::{CoreError, StudentEmbedding};

#[test]
fn test_validate_vector_accepts_expected_dimension() {
    let v = vec![0.1f32; 4];
    assert!(StudentEmbedding::validate_vector(&v, 4).is_ok());
}

#[test]
fn test_validate_vector_zero_dim_accepts_any_length() {
    let v = vec![0.1f32; 7];
    assert!(StudentEmbedding::validate_vector(&v, 0).is_ok());
}

#[test]
fn test_validate_vector_rejects_wrong_dimension() {
    let v = vec![0.1f32; 3];
    let err = StudentEmbedding::validate_vector(&v, 512).unwrap_err();
    assert!(matches!(err, CoreError::Embedding { .. }));
    assert!(err.to_string().contains("expected 512"));
}

#[test]
fn test_validate_vector_rejects_empty_and_nan() {
    assert!(StudentEmbedding::validate_vector(&[], 0).is_err());
    assert!(StudentEmbedding::validate_vector(&[0.5, f32::NAN], 2).is_err());
}
