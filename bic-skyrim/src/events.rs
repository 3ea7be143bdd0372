//! Menu lifecycle events delivered by the host UI.

use std::fmt;

/// Host menu name of the player inventory.
pub const INVENTORY_MENU: &str = "InventoryMenu";
/// Host menu name of the merchant trade screen.
pub const BARTER_MENU: &str = "BarterMenu";
/// Host menu name of the container transfer screen.
pub const CONTAINER_MENU: &str = "ContainerMenu";

/// The menus that get best-in-class marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// Player inventory.
    Inventory,
    /// Trading with a merchant.
    Barter,
    /// Looting or storing in a container.
    Container,
}

impl MenuKind {
    /// All recognized menus.
    pub const ALL: [MenuKind; 3] = [Self::Inventory, Self::Barter, Self::Container];

    /// Recognize a host menu name.
    #[must_use]
    pub fn from_menu_name(name: &str) -> Option<Self> {
        match name {
            INVENTORY_MENU => Some(Self::Inventory),
            BARTER_MENU => Some(Self::Barter),
            CONTAINER_MENU => Some(Self::Container),
            _ => None,
        }
    }

    /// The host's name for this menu.
    #[must_use]
    pub fn menu_name(self) -> &'static str {
        match self {
            Self::Inventory => INVENTORY_MENU,
            Self::Barter => BARTER_MENU,
            Self::Container => CONTAINER_MENU,
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_name())
    }
}

/// A menu was opened or closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOpenCloseEvent {
    /// Host menu name.
    pub menu_name: String,
    /// `true` when opening, `false` when closing.
    pub opening: bool,
}

impl MenuOpenCloseEvent {
    /// An opening event for `menu_name`.
    #[must_use]
    pub fn opened(menu_name: impl Into<String>) -> Self {
        Self {
            menu_name: menu_name.into(),
            opening: true,
        }
    }

    /// A closing event for `menu_name`.
    #[must_use]
    pub fn closed(menu_name: impl Into<String>) -> Self {
        Self {
            menu_name: menu_name.into(),
            opening: false,
        }
    }

    /// The recognized menu this event opens, if any.
    #[must_use]
    pub fn opened_menu(&self) -> Option<MenuKind> {
        if self.opening {
            MenuKind::from_menu_name(&self.menu_name)
        } else {
            None
        }
    }
}

/// What the host should do with the event after the sink has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Deliver the event to the remaining sinks.
    Continue,
    /// Stop delivery.
    Abort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_three_menus() {
        for kind in MenuKind::ALL {
            assert_eq!(MenuKind::from_menu_name(kind.menu_name()), Some(kind));
        }
        assert_eq!(MenuKind::from_menu_name("MagicMenu"), None);
        assert_eq!(MenuKind::from_menu_name("inventorymenu"), None);
    }

    #[test]
    fn only_opening_events_open_a_menu() {
        assert_eq!(
            MenuOpenCloseEvent::opened(BARTER_MENU).opened_menu(),
            Some(MenuKind::Barter)
        );
        assert_eq!(MenuOpenCloseEvent::closed(BARTER_MENU).opened_menu(), None);
        assert_eq!(MenuOpenCloseEvent::opened("Journal Menu").opened_menu(), None);
    }
}
