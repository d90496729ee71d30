use crate::tests::Position;
use crate::Registry;

#[test]
pub fn tags_are_unique() {
	let mut registry = Registry::new();
	let a = registry.create_entity();
	let b = registry.create_entity();

	registry.tag_entity(a, "player");
	assert!(registry.entity_has_tag(a, "player"));
	assert_eq!(registry.get_entity_by_tag("player"), Some(a));

	registry.tag_entity(b, "player");
	assert_eq!(registry.get_entity_by_tag("player"), Some(b));
	assert!(!registry.entity_has_tag(a, "player"), "The tag should have moved to the second entity");
	assert_eq!(registry.entity_tag(a), None);
	assert_eq!(registry.entity_tag(b), Some("player"));
}

#[test]
pub fn retagging_drops_the_old_tag() {
	let mut registry = Registry::new();
	let entity = registry.create_entity();

	entity.tag(&mut registry, "hero");
	entity.tag(&mut registry, "villain");

	assert!(entity.has_tag(&registry, "villain"));
	assert!(!entity.has_tag(&registry, "hero"));
	assert_eq!(registry.get_entity_by_tag("hero"), None);
	assert_eq!(registry.get_entity_by_tag("villain"), Some(entity));
}

#[test]
pub fn removing_tags() {
	let mut registry = Registry::new();
	let entity = registry.create_entity();
	let untagged = registry.create_entity();

	registry.tag_entity(entity, "player");
	registry.remove_entity_tag(entity);
	registry.remove_entity_tag(untagged);

	assert_eq!(registry.get_entity_by_tag("player"), None);
	assert!(!registry.entity_has_tag(entity, "player"));
}

#[test]
pub fn groups_hold_many_entities() {
	let mut registry = Registry::new();
	let entities: Vec<_> = (0..4).map(|_| registry.create_entity()).collect();

	registry.group_entity(entities[2], "enemies");
	registry.group_entity(entities[0], "enemies");
	registry.group_entity(entities[1], "projectiles");

	assert_eq!(registry.get_entities_by_group("enemies"), vec![entities[0], entities[2]]);
	assert_eq!(registry.get_entities_by_group("projectiles"), vec![entities[1]]);
	assert!(registry.get_entities_by_group("pickups").is_empty());
	assert!(entities[0].belongs_to_group(&registry, "enemies"));
	assert!(!registry.entity_belongs_to_group(entities[3], "enemies"));
	assert_eq!(registry.entity_group(entities[3]), None);
}

#[test]
pub fn joining_a_group_leaves_the_previous_one() {
	let mut registry = Registry::new();
	let entity = registry.create_entity();

	entity.group(&mut registry, "enemies");
	entity.group(&mut registry, "allies");

	assert!(!registry.entity_belongs_to_group(entity, "enemies"));
	assert!(registry.entity_belongs_to_group(entity, "allies"));
	assert!(registry.get_entities_by_group("enemies").is_empty());
	assert_eq!(registry.entity_group(entity), Some("allies"));

	registry.remove_entity_group(entity);
	registry.remove_entity_group(entity);
	assert_eq!(registry.entity_group(entity), None);
	assert!(registry.get_entities_by_group("allies").is_empty());
}

#[test]
pub fn killed_entities_leave_tags_and_groups() {
	let mut registry = Registry::new();
	let player = registry.create_entity();
	registry.add_component(player, Position::default());
	registry.tag_entity(player, "player");
	registry.group_entity(player, "heroes");
	registry.update();

	registry.kill_entity(player);
	assert_eq!(registry.get_entity_by_tag("player"), Some(player), "Tags survive until the update");
	registry.update();

	let recycled = registry.create_entity();
	assert_eq!(recycled.id(), player.id());
	assert_eq!(registry.get_entity_by_tag("player"), None, "A recycled id must not inherit the tag");
	assert!(!registry.entity_has_tag(recycled, "player"));
	assert!(!registry.entity_belongs_to_group(recycled, "heroes"));
	assert!(registry.get_entities_by_group("heroes").is_empty());
}
