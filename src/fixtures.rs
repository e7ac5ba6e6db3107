//! Random users for demos and smoke tests

use rand::Rng;

use crate::models::User;

const MOVIE_CHARACTERS: &[&str] = &[
    "James Bond",
    "Indiana Jones",
    "Ellen Ripley",
    "Luke Skywalker",
    "Darth Vader",
    "Tony Stark",
    "Bruce Wayne",
    "Hermione Granger",
    "Harry Potter",
    "Forrest Gump",
    "Michael Corleone",
    "Rick Blaine",
    "Jack Sparrow",
    "Hannibal Lecter",
    "Dorothy Gale",
    "Rocky Balboa",
    "Sarah Connor",
    "Marty McFly",
    "Han Solo",
    "Katniss Everdeen",
    "John McClane",
    "Vito Corleone",
    "Norman Bates",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "example.com",
];

const LOCAL_PART_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A not-yet-persisted user with a random name and email
pub fn random_user() -> User {
    let mut rng = rand::thread_rng();
    User::new(random_name(&mut rng), random_email(&mut rng))
}

/// `<0-49>-<Character-Name>-<0-49>`
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let character = MOVIE_CHARACTERS[rng.gen_range(0..MOVIE_CHARACTERS.len())];
    format!(
        "{}-{}-{}",
        rng.gen_range(0..50),
        character.replace(' ', "-"),
        rng.gen_range(0..50)
    )
}

/// 8 to 12 lowercase alphanumerics at a well-known domain
pub fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = rng.gen_range(8..=12);
    let local: String = (0..length)
        .map(|_| LOCAL_PART_CHARSET[rng.gen_range(0..LOCAL_PART_CHARSET.len())] as char)
        .collect();
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    format!("{}@{}", local, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_user;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let name = random_name(&mut rng);
            assert!(!name.contains(' '), "{}", name);

            let (prefix, rest) = name.split_once('-').unwrap();
            let (character, suffix) = rest.rsplit_once('-').unwrap();
            assert!(prefix.parse::<u32>().unwrap() < 50);
            assert!(suffix.parse::<u32>().unwrap() < 50);
            assert!(MOVIE_CHARACTERS
                .iter()
                .any(|c| c.replace(' ', "-") == character));
        }
    }

    #[test]
    fn test_random_email_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let email = random_email(&mut rng);
            let (local, domain) = email.split_once('@').unwrap();
            assert!((8..=12).contains(&local.len()), "{}", email);
            assert!(local.bytes().all(|b| LOCAL_PART_CHARSET.contains(&b)));
            assert!(EMAIL_DOMAINS.contains(&domain));
        }
    }

    #[test]
    fn test_random_user_is_valid_and_unsaved() {
        for _ in 0..20 {
            let user = random_user();
            assert!(user.id.is_nil());
            assert!(validate_user(&user).is_ok(), "{}", user);
        }
    }
}
