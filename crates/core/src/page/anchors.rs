/// Element id targeted by an in-page link, if the link is a usable `#id` anchor.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_with_ids() {
        assert_eq!(anchor_target("#facts"), Some("facts"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/quiz#facts"), None);
    }
}
