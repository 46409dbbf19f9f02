//! Scene contents: pickable items, static props and the ground plane

use macroquad::prelude::*;
use super::raycast::{ray_aabb, Aabb, Ray};

/// Height of the ground plane
pub const GROUND_Y: f32 = 0.0;

/// Extra space left between a dropped item and the prop in front of it
const DROP_MARGIN: f32 = 0.01;

/// Stable handle for a spawned world item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldItemId(pub u64);

/// An item instance placed in the world
#[derive(Debug, Clone)]
pub struct WorldItem {
    pub id: WorldItemId,
    /// Index into the item registry
    pub item_index: usize,
    /// Center of the item cube
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_size: f32,
    /// Only pickable items are reported by detection
    pub pickable: bool,
    pub resting: bool,
}

impl WorldItem {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, Vec3::splat(self.half_size))
    }
}

/// Static collider that blocks the view ray
#[derive(Debug, Clone)]
pub struct Prop {
    pub aabb: Aabb,
    pub color: Color,
}

/// What a ray hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Item(WorldItemId),
    Prop,
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub distance: f32,
    pub target: HitTarget,
}

#[derive(Debug, Default)]
pub struct World {
    items: Vec<WorldItem>,
    props: Vec<Prop>,
    next_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_prop(&mut self, aabb: Aabb, color: Color) {
        self.props.push(Prop { aabb, color });
    }

    /// Instantiate an item in the world. It falls until it lands on something.
    pub fn spawn_item(&mut self, item_index: usize, position: Vec3, half_size: f32) -> WorldItemId {
        let id = WorldItemId(self.next_id);
        self.next_id += 1;
        self.items.push(WorldItem {
            id,
            item_index,
            position,
            velocity: Vec3::ZERO,
            half_size,
            pickable: true,
            resting: false,
        });
        log::debug!("Spawned item #{} at {:?}", item_index, position);
        id
    }

    pub fn despawn_item(&mut self, id: WorldItemId) -> Option<WorldItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn item(&self, id: WorldItemId) -> Option<&WorldItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[WorldItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [WorldItem] {
        &mut self.items
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Nearest hit along the ray within max_distance
    pub fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
        let mut nearest: Option<RaycastHit> = None;
        let mut consider = |distance: f32, target: HitTarget| {
            if distance > max_distance {
                return;
            }
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(RaycastHit { distance, target });
            }
        };

        for item in &self.items {
            if let Some(distance) = ray_aabb(ray, &item.aabb()) {
                consider(distance, HitTarget::Item(item.id));
            }
        }

        if let Some(distance) = self.prop_distance(ray) {
            consider(distance, HitTarget::Prop);
        }

        // Ground plane
        if ray.direction.y < 0.0 && ray.origin.y > GROUND_Y {
            consider((GROUND_Y - ray.origin.y) / ray.direction.y, HitTarget::Ground);
        }

        nearest
    }

    /// Distance to the nearest prop along the ray
    fn prop_distance(&self, ray: &Ray) -> Option<f32> {
        self.props
            .iter()
            .filter_map(|prop| ray_aabb(ray, &prop.aabb))
            .reduce(f32::min)
    }

    /// Where an item of `half_size` thrown from `from` towards `to` comes to be.
    /// Stops short of the first prop so the item never starts inside one.
    pub fn drop_position(&self, from: Vec3, to: Vec3, half_size: f32) -> Vec3 {
        let ray = Ray::new(from, to - from);
        let distance = from.distance(to);
        // Bounding sphere of the cube, so diagonal rays clear the prop too
        let clearance = half_size * 3.0_f32.sqrt() + DROP_MARGIN;
        let reach = match self.prop_distance(&ray) {
            Some(hit) if hit < distance + clearance => (hit - clearance).clamp(0.0, distance),
            _ => distance,
        };
        ray.at(reach)
    }

    /// True if a body of `radius` standing at `position` overlaps a prop footprint.
    /// Props are treated as full height.
    pub fn is_blocked(&self, position: Vec3, radius: f32) -> bool {
        self.props.iter().any(|prop| {
            let (min, max) = (prop.aabb.min, prop.aabb.max);
            position.x > min.x - radius
                && position.x < max.x + radius
                && position.z > min.z - radius
                && position.z < max.z + radius
        })
    }

    /// Highest surface below `bottom` under the given XZ position
    fn support_height(&self, position: Vec3, bottom: f32) -> f32 {
        self.props
            .iter()
            .filter(|prop| prop.aabb.contains_xz(position) && prop.aabb.max.y <= bottom + 1e-3)
            .map(|prop| prop.aabb.max.y)
            .fold(GROUND_Y, f32::max)
    }

    /// Advance falling items by one fixed step
    pub fn step(&mut self, dt: f32, gravity: f32) {
        for i in 0..self.items.len() {
            if self.items[i].resting {
                continue;
            }

            let (position, half) = (self.items[i].position, self.items[i].half_size);
            let support = self.support_height(position, position.y - half);

            let item = &mut self.items[i];
            item.velocity.y -= gravity * dt;
            item.position += item.velocity * dt;

            if item.position.y - half <= support {
                item.position.y = support + half;
                item.velocity = Vec3::ZERO;
                item.resting = true;
            }
        }
    }
}
