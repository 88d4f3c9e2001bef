/// A finished-work photo shown in the gallery grid and the lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "/images/photo1.jpg",
        caption: "Санузел — керамогранит, ванна",
    },
    GalleryImage {
        src: "/images/photo2.jpg",
        caption: "Открытая полка — керамогранит",
    },
    GalleryImage {
        src: "/images/photo3.jpg",
        caption: "Открытая полка — керамогранит",
    },
    GalleryImage {
        src: "/images/photo4.jpg",
        caption: "Открытая полка — керамогранит",
    },
    GalleryImage {
        src: "/images/photo5.jpg",
        caption: "Санузел под ключ",
    },
    GalleryImage {
        src: "/images/photo6.jpg",
        caption: "Санузел под ключ",
    },
    GalleryImage {
        src: "/images/photo7.jpg",
        caption: "Ванная комната — керамогранит, ванна",
    },
    GalleryImage {
        src: "/images/photo8.jpg",
        caption: "Ванная комната — керамогранит, душ",
    },
    GalleryImage {
        src: "/images/photo9.jpg",
        caption: "Санузел — керамогранит, ванна",
    },
    GalleryImage {
        src: "/images/photo10.jpg",
        caption: "Пол — крупный формат 60×120",
    },
    GalleryImage {
        src: "/images/photo12.jpg",
        caption: "Санузел — скрытая ниша",
    },
    GalleryImage {
        src: "/images/photo13.jpg",
        caption: "Кухня — фартук и столешница",
    },
    GalleryImage {
        src: "/images/photo14.jpg",
        caption: "Фартук кухни — белый кабанчик",
    },
    GalleryImage {
        src: "/images/photo15.jpg",
        caption: "Декоративные швы и примыкания",
    },
    GalleryImage {
        src: "/images/photo16.jpg",
        caption: "Фартук кухни — белый кабанчик",
    },
    GalleryImage {
        src: "/images/photo22.jpg",
        caption: "Душ — линейный трап, стекло",
    },
];

/// Lightbox cursor over an image list; navigation wraps around both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Opens on `index`; out-of-range indices wrap, an empty list stays closed.
    pub fn open(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index % self.len;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn current<'a>(&self, images: &'a [GalleryImage]) -> Option<&'a GalleryImage> {
        if !self.is_open() {
            return None;
        }
        images.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_around() {
        let mut lightbox = Lightbox::new(GALLERY.len());
        lightbox.open(0);
        lightbox.prev();
        assert_eq!(lightbox.index(), GALLERY.len() - 1);
        lightbox.next();
        assert_eq!(lightbox.index(), 0);

        lightbox.open(GALLERY.len() - 1);
        lightbox.next();
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn current_image_only_while_open() {
        let mut lightbox = Lightbox::new(GALLERY.len());
        assert!(lightbox.current(GALLERY).is_none());

        lightbox.open(9);
        assert_eq!(
            lightbox.current(GALLERY).map(|img| img.src),
            Some("/images/photo10.jpg")
        );

        lightbox.close();
        assert!(lightbox.current(GALLERY).is_none());
        assert_eq!(lightbox.index(), 9);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        lightbox.open(3);
        lightbox.next();
        lightbox.prev();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.index(), 0);
    }
}
