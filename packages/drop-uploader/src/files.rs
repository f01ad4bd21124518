/// An ordered collection of file handles, such as the `FileList` held by an `<input type="file">` or carried by a
/// drop.
///
/// The uploader never reads file contents. It only needs to know how many files there are and what they are called.
pub trait SelectedFiles {
    /// The number of files in the collection.
    fn len(&self) -> usize;

    /// The name of the file at `index`, if there is one.
    fn name(&self, index: usize) -> Option<String>;

    /// Whether the collection holds no files at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The name of the first file. This is the one the label shows.
    fn first_name(&self) -> Option<String> {
        self.name(0)
    }

    /// The names of every file, in order.
    fn names(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.name(i)).collect()
    }
}

/// File names standing in for real handles. Useful off the web, where there is no `FileList` to hand around.
impl SelectedFiles for Vec<String> {
    fn len(&self) -> usize {
        <[String]>::len(self)
    }

    fn name(&self, index: usize) -> Option<String> {
        self.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_keep_their_order() {
        let files = vec!["b.txt".to_string(), "a.txt".to_string()];
        assert_eq!(files.first_name().as_deref(), Some("b.txt"));
        assert_eq!(files.names(), ["b.txt", "a.txt"]);
        assert!(!SelectedFiles::is_empty(&files));
    }

    #[test]
    fn empty_collection_has_no_first_name() {
        let files: Vec<String> = Vec::new();
        assert!(SelectedFiles::is_empty(&files));
        assert_eq!(files.first_name(), None);
    }
}
