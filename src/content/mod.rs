// Blog content
// Posts are static data; the only behavior here is lookup by slug.

mod posts;

pub use posts::posts;

/// One body section of a post
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Heading(&'static str),
    Prose(&'static str),
    Code {
        language: &'static str,
        source: &'static str,
    },
}

pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub sections: &'static [Section],
}

/// Look a post up by its URL slug
pub fn find(slug: &str) -> Option<&'static Post> {
    posts().iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_slug() {
        for post in posts() {
            let found = find(post.slug).expect("published post is reachable");
            assert_eq!(found.title, post.title);
        }
    }

    #[test]
    fn test_find_unknown_slug() {
        assert!(find("no-such-post").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: Vec<_> = posts().iter().map(|p| p.slug).collect();
        let mut deduped = slugs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(slugs.len(), deduped.len());
    }

    #[test]
    fn test_code_sections_carry_text() {
        let has_code = posts().iter().any(|post| {
            post.sections.iter().any(|section| {
                matches!(section, Section::Code { source, .. } if !source.is_empty())
            })
        });
        assert!(has_code);
    }
}
