use crate::models::{Handle, TagSet};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Shows `tags` on the selected monitor. The previous tag set is kept in
    /// the other slot, and an empty set switches back to it.
    pub fn view(&mut self, tags: TagSet) {
        let mask = self.tags.mask();
        let tags = tags & mask;
        let Some(mon) = self.monitors.get_mut(self.selected_monitor) else {
            return;
        };
        if tags == mon.active_tags() {
            return;
        }
        mon.selected_tags ^= 1;
        if !tags.is_empty() {
            mon.tagset[mon.selected_tags] = tags;
        }
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    /// Adds or removes tags from the selected monitor's view, refusing to
    /// leave it with none.
    pub fn toggle_view(&mut self, tags: TagSet) {
        let mask = self.tags.mask();
        let Some(mon) = self.monitors.get_mut(self.selected_monitor) else {
            return;
        };
        let toggled = mon.active_tags() ^ (tags & mask);
        if toggled.is_empty() {
            return;
        }
        mon.tagset[mon.selected_tags] = toggled;
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    /// Moves the selected client onto `tags`.
    pub fn tag(&mut self, tags: TagSet) {
        let tags = tags & self.tags.mask();
        if tags.is_empty() {
            return;
        }
        let Some(client) = self
            .selected_client()
            .and_then(|h| self.clients.get_mut(&h))
        else {
            return;
        };
        client.tags = tags;
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    pub fn toggle_tag(&mut self, tags: TagSet) {
        let mask = self.tags.mask();
        let Some(client) = self
            .selected_client()
            .and_then(|h| self.clients.get_mut(&h))
        else {
            return;
        };
        let toggled = client.tags ^ (tags & mask);
        if toggled.is_empty() {
            return;
        }
        client.tags = toggled;
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{test_window, TagSet, WindowHandle};
    use crate::Manager;

    fn tags() -> Vec<String> {
        (1..=4).map(|i| i.to_string()).collect()
    }

    #[test]
    fn view_keeps_the_previous_tag_set() {
        let mut manager = Manager::new_test(tags());
        manager.state.view(TagSet::single(3));
        assert_eq!(manager.state.monitors[0].active_tags(), TagSet::single(3));
        manager.state.view(TagSet::EMPTY);
        assert_eq!(manager.state.monitors[0].active_tags(), TagSet::single(1));
        manager.state.view(TagSet::EMPTY);
        assert_eq!(manager.state.monitors[0].active_tags(), TagSet::single(3));
    }

    #[test]
    fn viewing_all_tags_is_limited_to_configured_tags() {
        let mut manager = Manager::new_test(tags());
        manager.state.view(TagSet::ALL);
        assert_eq!(manager.state.monitors[0].active_tags().bits(), 0b1111);
    }

    #[test]
    fn toggle_view_never_empties_the_view() {
        let mut manager = Manager::new_test(tags());
        manager.state.toggle_view(TagSet::single(2));
        assert_eq!(manager.state.monitors[0].active_tags().bits(), 0b11);
        manager.state.toggle_view(TagSet::single(1) | TagSet::single(2));
        assert_eq!(manager.state.monitors[0].active_tags().bits(), 0b11);
    }

    #[test]
    fn tagging_hides_the_client_and_moves_focus() {
        let mut manager = Manager::new_test(tags());
        manager.state.manage(&test_window(1));
        manager.state.manage(&test_window(2));
        manager.state.tag(TagSet::single(4));
        assert_eq!(manager.state.clients[&WindowHandle(2)].tags, TagSet::single(4));
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(1)));
    }

    #[test]
    fn toggle_tag_never_leaves_a_client_tagless() {
        let mut manager = Manager::new_test(tags());
        manager.state.manage(&test_window(1));
        manager.state.toggle_tag(TagSet::single(1));
        assert_eq!(manager.state.clients[&WindowHandle(1)].tags, TagSet::single(1));
        manager.state.toggle_tag(TagSet::single(2));
        assert_eq!(manager.state.clients[&WindowHandle(1)].tags.bits(), 0b11);
    }

    #[test]
    fn tags_beyond_the_configured_count_are_ignored() {
        let mut manager = Manager::new_test(tags());
        manager.state.manage(&test_window(1));
        manager.state.tag(TagSet::single(9));
        assert_eq!(manager.state.clients[&WindowHandle(1)].tags, TagSet::single(1));
    }
}
