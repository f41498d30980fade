use std::fs;
use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::error::Error;
use crate::profile::{Profile, generate_profiles};

/// Serialize `profiles` as a pretty-printed JSON array and write it to `path`
/// in a single write, replacing any previous contents.
///
/// Output uses 2-space indentation, leaves non-ASCII text unescaped and has no
/// trailing newline. An empty slice is written as `[]`.
pub fn write_profiles(path: &Path, profiles: &[Profile]) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(profiles)?;

    fs::write(path, &bytes).map_err(|source| Error::Write { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), count = profiles.len(), bytes = bytes.len(), "wrote profiles");
    Ok(())
}

/// Generate `n` profiles from the thread-local random source and save them to
/// `path`. Returns the profiles in the order they were written.
pub fn save_profiles(n: usize, path: impl AsRef<Path>) -> Result<Vec<Profile>, Error> {
    save_profiles_with(&mut rand::thread_rng(), n, path)
}

/// Like [`save_profiles`], drawing from the caller's random source.
pub fn save_profiles_with<R: Rng>(
    rng: &mut R,
    n: usize,
    path: impl AsRef<Path>,
) -> Result<Vec<Profile>, Error> {
    let profiles = generate_profiles(rng, n);
    write_profiles(path.as_ref(), &profiles)?;
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::*;
    use crate::reference::{AGE_RANGE, CITIES, DOMAINS, EMAIL_NUMBER_RANGE, FIRST_NAMES, LAST_NAMES};

    #[test]
    fn test_empty_sequence_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let profiles = save_profiles(0, &path).unwrap();

        assert!(profiles.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let profiles = vec![Profile {
            name: "Diana Brown".into(),
            email: "diana.brown42@gmail.com".into(),
            age: 18,
            city: "San José".into(),
        }];

        write_profiles(&path, &profiles).unwrap();

        let expected = "[\n  {\n    \"name\": \"Diana Brown\",\n    \"email\": \"diana.brown42@gmail.com\",\n    \"age\": 18,\n    \"city\": \"San José\"\n  }\n]";
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        save_profiles(1, &path).unwrap();

        let written: Vec<Profile> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
    }

    #[test]
    fn test_seeded_save_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        let first = save_profiles_with(&mut StdRng::seed_from_u64(99), 1, &a).unwrap();
        let second = save_profiles_with(&mut StdRng::seed_from_u64(99), 1, &b).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_seeded_save_matches_replayed_draws() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        // Same seed, same draw order: first, last, number, domain, age, city
        let mut rng = StdRng::seed_from_u64(99);
        let first = *FIRST_NAMES.choose(&mut rng).unwrap();
        let last = *LAST_NAMES.choose(&mut rng).unwrap();
        let number = rng.gen_range(EMAIL_NUMBER_RANGE);
        let domain = *DOMAINS.choose(&mut rng).unwrap();
        let age = rng.gen_range(AGE_RANGE);
        let city = *CITIES.choose(&mut rng).unwrap();
        let expected = Profile {
            name: format!("{first} {last}"),
            email: format!("{}.{}{number}@{domain}", first.to_lowercase(), last.to_lowercase()),
            age,
            city: city.to_string(),
        };

        let returned = save_profiles_with(&mut StdRng::seed_from_u64(99), 1, &path).unwrap();
        let written: Vec<Profile> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(returned, vec![expected.clone()]);
        assert_eq!(written, vec![expected]);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = save_profiles(3, &path).unwrap_err();

        match err {
            Error::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
