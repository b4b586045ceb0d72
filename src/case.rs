use crate::normalize::is_combining;

#[inline]
fn push_mapping(out: &mut String, mapping: &[u32]) {
    out.extend(
        mapping
            .iter()
            .take_while(|&&c| c > 0)
            .filter_map(|&c| char::from_u32(c)),
    );
}

#[inline]
fn push_lowercase(out: &mut String, c: char) {
    let mapping = unicode_case_mapping::to_lowercase(c);
    if mapping[0] == 0 {
        out.push(c);
    } else {
        push_mapping(out, &mapping);
    }
}

#[inline]
fn push_titlecase(out: &mut String, c: char) {
    let mapping = unicode_case_mapping::to_titlecase(c);
    if mapping[0] == 0 {
        out.push(c);
    } else {
        push_mapping(out, &mapping);
    }
}

/// Title-cases every word: a letter following a non-letter is title-cased,
/// any other letter is lowercased. "DE LA CRUZ" becomes "De La Cruz".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if capitalize_next {
                push_titlecase(&mut result, c);
            } else {
                push_lowercase(&mut result, c);
            }
            capitalize_next = false;
        } else {
            result.push(c);
            capitalize_next = !is_combining(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word() {
        assert_eq!("Maria", title_case("MARIA"));
        assert_eq!("Nuñez", title_case("NUÑEZ"));
    }

    #[test]
    fn compound() {
        assert_eq!("De La Cruz", title_case("DE LA CRUZ"));
        assert_eq!("Jose Luis", title_case("jose luis"));
    }

    #[test]
    fn punctuation_starts_word() {
        assert_eq!("O'Brien", title_case("O'BRIEN"));
        assert_eq!("Ma.", title_case("MA."));
    }

    #[test]
    fn empty() {
        assert_eq!("", title_case(""));
    }
}
