//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Matching conditions](#matching-conditions)
//! - [Root search](#root-search)
//! - [Infinite well](#infinite-well)
//!
//! # Background
//! A particle of mass *m* in the finite square well
//! ```text
//! V(x) = 0    for |x| ≤ a
//!        V0   otherwise
//! ```
//! has bound states only for energies 0 < *E* < *V0*. In the classically
//! allowed region the time-independent Schrödinger equation (TISE)
//! ```text
//!   ħ²  ∂²ψ
//! - --  --- + V(x) ψ = E ψ
//!   2m  ∂x²
//! ```
//! gives oscillatory solutions with wave number
//! ```text
//!     √(2 m E)
//! k = --------
//!        ħ
//! ```
//! and in the forbidden regions exponentially decaying solutions with decay
//! constant
//! ```text
//!     √(2 m (V0 - E))
//! γ = ---------------
//!            ħ
//! ```
//! Since the potential is symmetric, the bound states can be chosen to have
//! definite parity: `cos(k x)` (even) or `sin(k x)` (odd) inside the well.
//!
//! # Matching conditions
//! Requiring that both *ψ* and *∂ψ*/*∂x* be continuous at *x* = *a* fixes the
//! ratio of the outside amplitude to the inside one and yields one
//! transcendental equation in *E* per parity:
//! ```text
//! even:   k tan(k a) = γ
//! odd:   -k cot(k a) = γ
//! ```
//! In terms of the dimensionless variables *z* = *k a* and
//! *z0* = *a* √(2 *m* *V0*) / *ħ* these read
//! ```text
//! even:   z tan(z) = √(z0² - z²)
//! odd:   -z cot(z) = √(z0² - z²)
//! ```
//! Each branch of the tangent between consecutive multiples of *π*/2 (up to
//! *z0*) contains exactly one root, alternating between even and odd parity,
//! so the well supports ⌈2 *z0* / *π*⌉ bound states. There is always at least
//! one even state, no matter how shallow the well.
//!
//! # Root search
//! The solver in [`roots`][crate::roots] scans the band (0, *V0*) for sign
//! changes of each matching condition, sampling at points evenly spaced in
//! *k a* and no more than *π*/4 apart. Roots of one parity are more than
//! *π*/2 apart in *k a*, so every root is bracketed exactly once. The lowest
//! nine brackets are handed, in order, to a fixed set of nine seeds per
//! parity, and each is refined with a safeguarded secant (Illinois)
//! iteration[^1]. The trigonometric poles of the conditions above would
//! otherwise produce sign changes that are not roots, so the search is run on
//! the equivalent pole-free forms
//! ```text
//! even:   k sin(k a) - γ cos(k a) = 0
//! odd:    k cos(k a) + γ sin(k a) = 0
//! ```
//! and candidates are finally checked against the untransformed conditions.
//!
//! Because each seed produces at most one root, no more than 18 states can be
//! found; wells with *z0* > 9 *π* have more bound states than that, and only
//! the lowest nine of each parity are returned.
//!
//! # Infinite well
//! For the infinite well on [0, *L*], the eigenpairs are
//! ```text
//!       (n π ħ)²               / 2       n π x
//! E_n = --------    ψ_n(x) =  / --- sin(-----)
//!       2 m L²              \/   L        L
//! ```
//! for *n* = 1, 2, ... . Since these are stationary, a superposition
//! evolves by attaching the phase factor exp(-*i* *E_n* *t* / *ħ*) to each
//! component.
//!
//! [^1]: M. Dowell and P. Jarratt, "A modified regula falsi method for
//! computing the root of an equation." BIT **11**, 168-174 (1971).
