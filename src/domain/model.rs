use serde::{Deserialize, Serialize};

/// Root entity as delivered by `GET {base}/people/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub name: String,
    /// The API delivers height as a string, e.g. `"172"` or `"unknown"`.
    pub height: String,
    pub gender: String,
    pub homeworld: String,
    pub films: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homeworld {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub director: String,
    pub release_date: String,
}

/// Denormalized aggregate of a person, its homeworld and its films.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonInfo {
    pub name: String,
    pub height: Option<i64>,
    pub gender: String,
    pub homeworld: String,
    pub films: Vec<Film>,
}

impl PersonInfo {
    /// `films` must already be in the order of `person.films`.
    pub fn assemble(person: Person, homeworld: Homeworld, films: Vec<Film>) -> Self {
        Self {
            height: parse_height(&person.height),
            name: person.name,
            gender: person.gender,
            homeworld: homeworld.name,
            films,
        }
    }
}

/// Base-10 integer prefix parse: leading whitespace, optional sign, then digits.
/// Trailing text is ignored; `None` when no digit is present.
pub fn parse_height(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Person {
        Person {
            name: "Luke Skywalker".to_string(),
            height: "172".to_string(),
            gender: "male".to_string(),
            homeworld: "https://swapi.dev/api/planets/1/".to_string(),
            films: vec![
                "https://swapi.dev/api/films/1/".to_string(),
                "https://swapi.dev/api/films/2/".to_string(),
            ],
        }
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("172"), Some(172));
        assert_eq!(parse_height("  96"), Some(96));
        assert_eq!(parse_height("172cm"), Some(172));
        assert_eq!(parse_height("+5"), Some(5));
        assert_eq!(parse_height("-12"), Some(-12));
        assert_eq!(parse_height("1,358"), Some(1));
        assert_eq!(parse_height("unknown"), None);
        assert_eq!(parse_height(""), None);
        assert_eq!(parse_height("-"), None);
    }

    #[test]
    fn test_assemble_person_info() {
        let films = vec![
            Film {
                title: "A New Hope".to_string(),
                director: "George Lucas".to_string(),
                release_date: "1977-05-25".to_string(),
            },
            Film {
                title: "The Empire Strikes Back".to_string(),
                director: "Irvin Kershner".to_string(),
                release_date: "1980-05-17".to_string(),
            },
        ];

        let info = PersonInfo::assemble(
            luke(),
            Homeworld {
                name: "Tatooine".to_string(),
            },
            films.clone(),
        );

        assert_eq!(info.name, "Luke Skywalker");
        assert_eq!(info.height, Some(172));
        assert_eq!(info.gender, "male");
        assert_eq!(info.homeworld, "Tatooine");
        assert_eq!(info.films, films);
    }

    #[test]
    fn test_person_ignores_unknown_fields() {
        let person: Person = serde_json::from_value(serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap();

        assert_eq!(person, luke());
    }

    #[test]
    fn test_person_info_serializes_output_shape() {
        let mut person = luke();
        person.height = "unknown".to_string();
        let info = PersonInfo::assemble(
            person,
            Homeworld {
                name: "Tatooine".to_string(),
            },
            vec![],
        );

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Luke Skywalker",
                "height": null,
                "gender": "male",
                "homeworld": "Tatooine",
                "films": []
            })
        );
    }
}
