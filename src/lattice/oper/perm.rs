use crate::FailResult;

/// Represents a reordering operation on lattice sites.
///
/// See the [`Permute`] trait for more information.
///
/// [`Permute`]: trait.Permute.html
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Perm {
    // the forward image: `image[site]` is where `site` lands.
    //
    // Symmetry plans are handed to the basis-enumeration layer as exactly
    // this table, so unlike a general-purpose permutation type there is no
    // profit in storing the inverse instead.
    image: Vec<usize>,
}

#[derive(Debug, Fail)]
#[fail(display = "Tried to construct an invalid permutation.")]
pub struct InvalidPermutationError(::failure::Backtrace);

impl Perm {
    pub fn eye(n: usize) -> Perm
    { Perm { image: (0..n).collect() } }

    pub fn len(&self) -> usize
    { self.image.len() }

    pub fn is_identity(&self) -> bool
    { self.image.iter().enumerate().all(|(i, &x)| i == x) }

    /// Construct a perm from its forward image; `vec[k]` is where `k` goes.
    ///
    /// This performs O(n log n) validation on the data to verify that it
    /// satisfies the invariants of `Perm`.
    pub fn from_vec(vec: Vec<usize>) -> Result<Perm, InvalidPermutationError> {
        if !Self::validate_data(&vec) {
            return Err(InvalidPermutationError(::failure::Backtrace::new()));
        }
        Ok(Perm { image: vec })
    }

    #[must_use = "doesn't assert"]
    fn validate_data(xs: &[usize]) -> bool {
        let mut vec = xs.to_vec();
        vec.sort();
        vec.into_iter().eq(0..xs.len())
    }

    fn debug_validated(self) -> Perm {
        debug_assert!(Perm::validate_data(&self.image));
        self
    }

    #[cfg(test)]
    pub fn random(n: usize) -> Perm {
        use ::rand::Rng;

        let mut image: Vec<_> = (0..n).collect();
        ::rand::thread_rng().shuffle(&mut image);
        Perm { image }
    }

    /// Recover the forward image table. `vec[k]` is where `k` goes.
    pub fn into_vec(self) -> Vec<usize>
    { self.image }

    pub fn as_slice(&self) -> &[usize]
    { &self.image }

    /// Apply the permutation to a single index. O(1).
    pub fn permute_index(&self, i: usize) -> usize
    { self.image[i] }

    #[must_use = "not an in-place operation"]
    pub fn inverted(&self) -> Perm {
        let mut inv = vec![::std::usize::MAX; self.image.len()];
        for (i, &x) in self.image.iter().enumerate() {
            inv[x] = i;
        }
        Perm { image: inv }.debug_validated()
    }

    pub fn pow_unsigned(&self, mut exp: u64) -> Perm {
        // Exponentiation by squaring (permutations form a monoid)
        let mut acc = Perm::eye(self.len());
        let mut base = self.clone();
        while exp > 0 {
            if (exp & 1) == 1 {
                acc = acc.then(&base);
            }
            base = base.then(&base);
            exp /= 2;
        }
        acc
    }
}

impl Perm {
    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`.  The flipped order is more aligned with how
    /// plans are consumed (as site -> image tables read left to right).
    ///
    /// More naturally,
    /// `x.permuted_by(a).permuted_by(b) == x.permuted_by(a.then(b))`.
    pub fn then(&self, other: &Perm) -> Perm {
        assert_eq!(self.len(), other.len(), "Incorrect permutation length");
        let image = self.image.iter().map(|&i| other.image[i]).collect();
        Perm { image }.debug_validated()
    }

    /// Conventional group operator.
    pub fn of(&self, other: &Perm) -> Perm
    { other.then(self) }
}

/// Trait for applying a permutation operation.
///
/// # Laws
///
/// All implementations of `Permute` must satisfy the following properties,
/// which give `Permute::permuted_by` the qualities of a group action:
///
/// * **Identity:**
///   ```text
///   data.permuted_by(Perm::eye(data.len())) == data
///   ```
/// * **Compatibility:**
///   ```text
///   data.permuted_by(a).permuted_by(b) == data.permuted_by(a.then(b))
///   ```
pub trait Permute: Sized {
    // awkward name, but it makes two things clear
    // beyond a shadow of a doubt:
    // - The receiver gets permuted, not the argument.
    //   (relevant when Self is Perm)
    // - The permutation is not in-place.
    fn permuted_by(self, perm: &Perm) -> Self;
}

impl<T> Permute for Vec<T> {
    fn permuted_by(self, perm: &Perm) -> Vec<T> {
        assert_eq!(
            self.len(), perm.len(),
            "Incorrect permutation length: {} vs {}",
            self.len(), perm.len(),
        );

        let mut out: Vec<Option<T>> = (0..self.len()).map(|_| None).collect();
        for (from, x) in self.into_iter().enumerate() {
            let to = perm.image[from];
            debug_assert!(out[to].is_none());
            out[to] = Some(x);
        }
        out.into_iter().map(|x| x.expect("BUG: perm image not a bijection")).collect()
    }
}

impl Permute for Perm {
    fn permuted_by(self, perm: &Perm) -> Perm
    { self.then(perm) }
}

/// Collects the destinations of a fallible site -> site map into a `Perm`.
///
/// This is how plan generators are expected to produce their output: the
/// validation doubles as a check that the underlying geometric operation
/// really is an isometry of the periodic lattice.
pub(crate) fn perm_from_images<F>(n: usize, mut image_of: F) -> FailResult<Perm>
where F: FnMut(usize) -> FailResult<usize>,
{
    let mut image = Vec::with_capacity(n);
    for site in 0..n {
        image.push(image_of(site)?);
    }
    Ok(Perm::from_vec(image)?)
}
