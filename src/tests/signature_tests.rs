use crate::components::ComponentId;
use crate::data_structures::{Signature, MAX_COMPONENTS};
use crate::tests::{Health, Position};

#[test]
pub fn set_and_get() {
	let mut signature = Signature::new();
	assert!(signature.is_empty());

	signature.set(0, true);
	signature.set(5, true);
	signature.set(MAX_COMPONENTS - 1, true);

	assert!(signature.get(0));
	assert!(signature.get(5));
	assert!(signature.get(MAX_COMPONENTS - 1));
	assert!(!signature.get(1));
	assert!(!signature.get(MAX_COMPONENTS), "Bits past the end should read as unset");
	assert_eq!(signature.count(), 3);
	assert_eq!(signature.iter_ones().collect::<Vec<_>>(), vec![0, 5, MAX_COMPONENTS - 1]);

	signature.set(5, false);
	assert!(!signature.get(5));
	assert_eq!(signature.count(), 2);

	signature.clear();
	assert!(signature.is_empty());
}

#[test]
pub fn subset_matching() {
	let required: Signature = [1, 3].into_iter().collect();
	let exact: Signature = [1, 3].into_iter().collect();
	let superset: Signature = [0, 1, 3, 7].into_iter().collect();
	let partial: Signature = [1, 7].into_iter().collect();

	assert!(required.is_subset_of(&exact));
	assert!(required.is_subset_of(&superset));
	assert!(!required.is_subset_of(&partial));
	assert!(!superset.is_subset_of(&required));

	assert_eq!(required.intersection(&superset), required);
	assert_eq!(required.intersection(&partial), [1].into_iter().collect::<Signature>());
}

#[test]
pub fn empty_signature_matches_everything() {
	let empty = Signature::new();
	assert!(empty.is_subset_of(&Signature::new()));
	assert!(empty.is_subset_of(&[2, 4].into_iter().collect()));
}

#[test]
#[should_panic]
pub fn set_out_of_range() {
	let mut signature = Signature::new();
	signature.set(MAX_COMPONENTS, true);
}

#[test]
pub fn from_component_ids() {
	let ids = [ComponentId::of::<Position>(), ComponentId::of::<Health>()];
	let signature = Signature::from(ids.as_slice());

	assert_eq!(signature.count(), 2);
	assert!(signature.get(ids[0].value()));
	assert!(signature.get(ids[1].value()));
}
