use std::collections::HashSet;

use log::debug;
use web_sys::HtmlImageElement;

use crate::gallery::image_url::ImageUrlBuilder;

/// Issues a best-effort image download. Implementations must not block and
/// must swallow failures.
pub trait Prefetcher {
    fn fetch(&self, url: &str);
}

/// Off-DOM `<img>`: setting `src` is enough for the browser to download
/// and cache the resource.
pub struct BrowserPrefetcher;

impl Prefetcher for BrowserPrefetcher {
    fn fetch(&self, url: &str) {
        match HtmlImageElement::new() {
            Ok(img) => {
                img.set_decoding("async");
                img.set_src(url);
            }
            Err(err) => debug!("Skipping prefetch of {}: {:?}", url, err),
        }
    }
}

/// Sources already warmed for the lightbox. Owned by one mounted gallery and
/// only ever grows.
pub struct PrefetchCache<P: Prefetcher> {
    seen: HashSet<String>,
    builder: ImageUrlBuilder,
    prefetcher: P,
}

impl<P: Prefetcher> PrefetchCache<P> {
    pub fn new(builder: ImageUrlBuilder, prefetcher: P) -> Self {
        Self {
            seen: HashSet::new(),
            builder,
            prefetcher,
        }
    }

    /// Returns whether a fetch was issued.
    pub fn ensure_prefetched(&mut self, path: &str) -> bool {
        if !self.seen.insert(path.to_string()) {
            return false;
        }
        let url = self.builder.full(path);
        debug!("Prefetching {}", url);
        self.prefetcher.fetch(&url);
        true
    }

    pub fn warmed(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::environment::ImageCapability;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingPrefetcher {
        urls: Rc<RefCell<Vec<String>>>,
    }

    impl Prefetcher for RecordingPrefetcher {
        fn fetch(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    fn cache(available: bool) -> (PrefetchCache<RecordingPrefetcher>, Rc<RefCell<Vec<String>>>) {
        let prefetcher = RecordingPrefetcher::default();
        let urls = prefetcher.urls.clone();
        let builder = ImageUrlBuilder::new(ImageCapability::new(available));
        (PrefetchCache::new(builder, prefetcher), urls)
    }

    #[test]
    fn repeated_hover_fetches_once() {
        let (mut cache, urls) = cache(true);
        assert!(cache.ensure_prefetched("/galeria/foto2.jpg"));
        assert!(!cache.ensure_prefetched("/galeria/foto2.jpg"));
        assert_eq!(urls.borrow().len(), 1);
        assert_eq!(cache.warmed(), 1);
    }

    #[test]
    fn fetches_full_resolution_webp() {
        let (mut cache, urls) = cache(true);
        cache.ensure_prefetched("/galeria/foto4.jpg");
        let url = &urls.borrow()[0];
        assert!(url.contains("w=1600"));
        assert!(url.contains("fm=webp"));
    }

    #[test]
    fn falls_back_to_original_path() {
        let (mut cache, urls) = cache(false);
        cache.ensure_prefetched("/galeria/foto4.jpg");
        assert_eq!(*urls.borrow(), vec!["/galeria/foto4.jpg".to_string()]);
    }

    #[test]
    fn distinct_paths_each_fetch() {
        let (mut cache, urls) = cache(true);
        cache.ensure_prefetched("/a.jpg");
        cache.ensure_prefetched("/b.jpg");
        cache.ensure_prefetched("/a.jpg");
        assert_eq!(cache.warmed(), 2);
        assert_eq!(urls.borrow().len(), 2);
    }
}
