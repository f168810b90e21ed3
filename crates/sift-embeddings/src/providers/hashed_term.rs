//! Hashed bag-of-terms provider.
//!
//! Terms are hashed (FNV-1a) into fixed-dimension buckets and weighted by
//! term frequency. Works with no model and no network, so it is always
//! available as the last link of an [`EmbeddingChain`](crate::EmbeddingChain).

use std::collections::HashMap;

use sift_core::errors::SiftResult;
use sift_core::traits::IEmbeddingProvider;

/// Deterministic dense embedder over hashed terms.
///
/// Texts that share terms land in shared buckets, which gives a crude but
/// stable notion of similarity.
pub struct HashedTermEmbedder {
    dimensions: usize,
}

impl HashedTermEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }
        let terms = Self::terms(text);
        if terms.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for t in &terms {
            *tf.entry(t.as_str()).or_default() += 1.0;
        }
        let total = terms.len() as f32;
        for (term, count) in tf {
            // Longer terms carry more signal than short function words.
            let weight = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTermEmbedder {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-term"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let v = HashedTermEmbedder::new(64).embed("").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_length() {
        let v = HashedTermEmbedder::new(256)
            .embed("install python on windows")
            .unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "got norm {norm}");
    }

    #[test]
    fn deterministic_and_batch_consistent() {
        let p = HashedTermEmbedder::new(128);
        let texts = vec!["reset vpn password".to_string(), "deploy".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(t).unwrap());
        }
    }

    #[test]
    fn shared_terms_score_higher() {
        let p = HashedTermEmbedder::new(512);
        let q = p.embed("install python").unwrap();
        let near = p.embed("how to install python on linux").unwrap();
        let far = p.embed("database backup schedule").unwrap();
        assert!(cosine(&q, &near) > cosine(&q, &far));
    }

    #[test]
    fn case_insensitive() {
        let p = HashedTermEmbedder::new(64);
        assert_eq!(p.embed("VPN Access").unwrap(), p.embed("vpn access").unwrap());
    }
}
