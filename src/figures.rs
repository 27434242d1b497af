use crate::Ring;

/// A named [`Ring`].
#[derive(Debug, Clone, PartialEq)]
pub struct Figure<T = f64> {
    /// The name identifying the ring.
    pub name: String,
    /// The ring itself.
    pub ring: Ring<T>,
}

/// An ordered collection of uniquely named rings.
#[derive(Debug, Clone)]
pub struct Figures<T = f64> {
    figures: Vec<Figure<T>>,
}

impl<T> Default for Figures<T> {
    fn default() -> Self {
        Self {
            figures: Default::default(),
        }
    }
}

impl<T> FromIterator<(String, Ring<T>)> for Figures<T> {
    fn from_iter<I: IntoIterator<Item = (String, Ring<T>)>>(iter: I) -> Self {
        let mut figures = Self::default();
        for (name, ring) in iter {
            figures.insert(name, ring);
        }

        figures
    }
}

impl<T> IntoIterator for Figures<T> {
    type Item = Figure<T>;
    type IntoIter = std::vec::IntoIter<Figure<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Figures<T> {
    type Item = &'a Figure<T>;
    type IntoIter = std::slice::Iter<'a, Figure<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.iter()
    }
}

impl<T> Figures<T> {
    /// Inserts the given ring under the given name.
    ///
    /// If the name already exists its ring is replaced, keeping its position, and the old one
    /// is returned.
    pub fn insert(&mut self, name: impl Into<String>, ring: Ring<T>) -> Option<Ring<T>> {
        let name = name.into();
        match self.figures.iter_mut().find(|figure| figure.name == name) {
            Some(figure) => Some(std::mem::replace(&mut figure.ring, ring)),
            None => {
                self.figures.push(Figure { name, ring });
                None
            }
        }
    }

    /// Returns the ring with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Ring<T>> {
        self.figures
            .iter()
            .find(|figure| figure.name == name)
            .map(|figure| &figure.ring)
    }

    /// Returns a mutable reference to the ring with the given name, if any.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Ring<T>> {
        self.figures
            .iter_mut()
            .find(|figure| figure.name == name)
            .map(|figure| &mut figure.ring)
    }

    /// Returns an ordered iterator over all the figures.
    pub fn iter(&self) -> std::slice::Iter<'_, Figure<T>> {
        self.figures.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Figure<T>> {
        self.figures.iter_mut()
    }

    /// Returns an ordered iterator over the names of all the figures.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.figures.iter().map(|figure| figure.name.as_str())
    }

    /// Returns the amount of figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Returns true if, and only if, there are no figures.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

impl<T> Figures<T>
where
    T: PartialEq,
{
    /// Removes every figure whose ring equals the ring of a previous figure, returning the names
    /// of the removed ones in order.
    pub fn dedup(&mut self) -> Vec<String> {
        let mut kept: Vec<Figure<T>> = Vec::with_capacity(self.figures.len());
        let mut removed = Vec::new();

        for figure in std::mem::take(&mut self.figures) {
            if kept.iter().any(|previous| previous.ring == figure.ring) {
                removed.push(figure.name);
            } else {
                kept.push(figure);
            }
        }

        tracing::debug!(removed = removed.len(), kept = kept.len(), "figures deduplicated");
        self.figures = kept;
        removed
    }
}
