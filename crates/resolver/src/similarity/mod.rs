//! Restaurant name similarity.
//!
//! Names are compared after [`normalize`], which folds case and drops
//! punctuation. Two names are similar when they are equal, when one contains
//! the other, or when a token-substitution variant of the first name relates
//! to the second in the same way.
//!
//! Apostrophe spellings (`mom's` / `moms`) need no variant of their own:
//! both normalize to the same text. `&` is stripped like any other
//! punctuation, so `"Frank & Steins"` and `"Frank Steins"` are equal; the
//! spelled-out `and` is handled by a variant that drops the token.

/// Whole-token substitutions applied to the first name, `(token, replacement)`.
/// An empty replacement drops the token.
const TOKEN_VARIANTS: &[(&str, &str)] = &[("og", "original"), ("chick", "chicken"), ("and", "")];

/// Lowercases `name`, strips everything except letters, digits and
/// whitespace, then collapses and trims whitespace.
pub fn normalize(name: &str) -> String {
	let folded: String = name
		.chars()
		.flat_map(char::to_lowercase)
		.filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
		.collect();
	folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true if `a` and `b` plausibly name the same restaurant.
///
/// Equal names are always similar, even when both normalize to empty text.
/// Otherwise a name that normalizes to empty text is similar to nothing.
pub fn similar(a: &str, b: &str) -> bool {
	let a = normalize(a);
	let b = normalize(b);
	if a == b {
		return true;
	}
	if a.is_empty() || b.is_empty() {
		return false;
	}
	related(&a, &b) || variants(&a).any(|variant| !variant.is_empty() && related(&variant, &b))
}

/// Similarity score in `0.0..=1.0`, the best normalized Levenshtein
/// similarity between `b` and `a` or any variant of `a`.
pub fn score(a: &str, b: &str) -> f64 {
	let a = normalize(a);
	let b = normalize(b);
	if a == b {
		return 1.0;
	}
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}
	variants(&a)
		.map(|variant| strsim::normalized_levenshtein(&variant, &b))
		.fold(strsim::normalized_levenshtein(&a, &b), f64::max)
}

fn related(a: &str, b: &str) -> bool {
	a == b || a.contains(b) || b.contains(a)
}

/// Each variant substitutes one token pair; pairs whose token is absent
/// produce nothing.
fn variants(normalized: &str) -> impl Iterator<Item = String> + '_ {
	TOKEN_VARIANTS.iter().filter_map(move |&(from, to)| {
		let mut hit = false;
		let replaced: Vec<&str> = normalized
			.split(' ')
			.map(|token| {
				if token == from {
					hit = true;
					to
				} else {
					token
				}
			})
			.collect();
		hit.then(|| replaced.into_iter().filter(|token| !token.is_empty()).collect::<Vec<_>>().join(" "))
	})
}
