// Pattern 10: Prototype - Deep-Copied Book Records
// Cloning a book duplicates every field, including the tag list, so the
// clone and the original can diverge freely afterwards.

use colored::Colorize;
use std::fmt;

// All fields are owned (`String`, `f64`, `Vec<String>`), so the derived
// `Clone` is a full deep copy: no data is shared between a book and its
// clone.
#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: String,
    author: String,
    price: f64,
    tags: Vec<String>,
}

impl Book {
    fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            tags: Vec::new(),
        }
    }

    fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Book(title={}, author={}, price={}, tags={:?})",
            self.title, self.author, self.price, self.tags
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Book {
        let mut book = Book::new("The Great Gatsby", "F. Scott Fitzgerald", 10.99);
        book.add_tag("classic");
        book
    }

    #[test]
    fn test_clone_equals_source_at_clone_time() {
        let book = original();
        assert_eq!(book.clone(), book);
    }

    #[test]
    fn test_mutating_clone_tags_leaves_original_untouched() {
        let book = original();
        let mut cloned = book.clone();
        cloned.add_tag("duplicate");

        assert_eq!(book.tags, vec!["classic"]);
        assert_eq!(cloned.tags, vec!["classic", "duplicate"]);
    }

    #[test]
    fn test_mutating_original_tags_leaves_clone_untouched() {
        let mut book = original();
        let cloned = book.clone();
        book.add_tag("first-edition");

        assert_eq!(cloned.tags, vec!["classic"]);
    }

    #[test]
    fn test_scalar_fields_diverge_independently() {
        let book = original();
        let mut cloned = book.clone();
        cloned.title = "The Great Gatsby (Clone)".to_string();
        cloned.price = 5.49;

        assert_eq!(book.title, "The Great Gatsby");
        assert_eq!(book.price, 10.99);
    }
}

fn main() {
    println!("{}", "=== Prototype ===".bold());

    let mut original_book = Book::new("The Great Gatsby", "F. Scott Fitzgerald", 10.99);
    original_book.add_tag("classic");

    let mut cloned_book = original_book.clone();
    cloned_book.title = "The Great Gatsby (Clone)".to_string();
    cloned_book.add_tag("duplicate");

    println!("Original Book: {}", original_book);
    println!("Cloned Book: {}", cloned_book);
}
