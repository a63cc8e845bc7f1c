use rstest::{fixture, rstest};

use super::{GridPager, GridPagerProps, GridPagerUserProps, PagerEvent};
use crate::config::{AllowedPageSizes, PageSize, Visibility};

#[fixture]
fn pager() -> GridPager {
    GridPager::default()
}

#[fixture]
fn paged_pager() -> GridPager {
    GridPager::new(GridPagerProps::builder().page_count(5).page_index(2).build())
}

fn with_user_props(user: GridPagerUserProps, page_count: usize, page_size: PageSize) -> GridPager {
    GridPager::new(
        GridPagerProps::builder().pager(user).page_count(page_count).page_size(page_size).build(),
    )
}

mod getters {
    use super::*;

    mod visible {
        use super::*;

        #[rstest]
        #[case(true, 1)]
        #[case(true, 10)]
        #[case(false, 1)]
        #[case(false, 10)]
        fn is_boolean_if_prop_is_boolean(#[case] visible: bool, #[case] page_count: usize) {
            let user = GridPagerUserProps::builder().visible(visible).build();

            let pager = with_user_props(user, page_count, PageSize::default());

            assert_eq!(pager.visible(), visible);
        }

        #[rstest]
        fn is_false_when_auto_and_page_count_is_one() {
            let user = GridPagerUserProps::builder().visible(Visibility::Auto).build();

            let pager = with_user_props(user, 1, PageSize::default());

            assert!(!pager.visible());
        }

        #[rstest]
        fn is_true_when_auto_and_page_count_is_more_than_one() {
            let user = GridPagerUserProps::builder().visible(Visibility::Auto).build();

            let pager = with_user_props(user, 2, PageSize::default());

            assert!(pager.visible());
        }

        #[rstest]
        fn defaults_to_auto(pager: GridPager) {
            assert_eq!(pager.props.pager.visible, Visibility::Auto);
            assert!(!pager.visible());
        }
    }

    mod allowed_page_sizes {
        use super::*;

        #[rstest]
        fn is_equal_to_prop_if_it_is_a_list() {
            let user = GridPagerUserProps::builder()
                .allowed_page_sizes(AllowedPageSizes::Explicit(vec![1, 2, 3]))
                .build();

            let pager = with_user_props(user, 1, PageSize::default());

            assert_eq!(pager.allowed_page_sizes(), vec![1, 2, 3]);
        }

        #[rstest]
        fn is_calculated_when_auto() {
            let user =
                GridPagerUserProps::builder().allowed_page_sizes(AllowedPageSizes::Auto).build();

            let pager = with_user_props(user, 1, PageSize::Fixed(20));

            assert_eq!(pager.allowed_page_sizes(), vec![10, 20, 40]);
        }

        #[rstest]
        #[case(PageSize::All)]
        #[case(PageSize::Fixed(0))]
        fn is_empty_when_auto_and_page_size_is_all(#[case] page_size: PageSize) {
            let user =
                GridPagerUserProps::builder().allowed_page_sizes(AllowedPageSizes::Auto).build();

            let pager = with_user_props(user, 1, page_size);

            assert_eq!(pager.allowed_page_sizes(), Vec::<u32>::new());
        }

        #[rstest]
        fn explicit_list_ignores_page_size() {
            let user = GridPagerUserProps::builder()
                .allowed_page_sizes(AllowedPageSizes::Explicit(vec![5, 50]))
                .build();

            let pager = with_user_props(user, 1, PageSize::All);

            assert_eq!(pager.allowed_page_sizes(), vec![5, 50]);
        }
    }

    mod page_size {
        use super::*;

        #[rstest]
        #[case(PageSize::Fixed(10), PageSize::Fixed(10))]
        #[case(PageSize::All, PageSize::All)]
        #[case(PageSize::Fixed(0), PageSize::All)]
        fn normalizes_configured_value(#[case] configured: PageSize, #[case] expected: PageSize) {
            let pager = GridPager::new(GridPagerProps::builder().page_size(configured).build());

            assert_eq!(pager.page_size(), expected);
        }

        #[rstest]
        fn does_not_touch_props(pager: GridPager) {
            let mut pager = pager;
            pager.props.page_size = PageSize::Fixed(0);

            assert_eq!(pager.page_size(), PageSize::All);
            assert_eq!(pager.props.page_size, PageSize::Fixed(0));
        }
    }

    #[rstest]
    fn derived_collects_all_getters() {
        let pager = GridPager::new(GridPagerProps::builder().page_count(3).build());

        let derived = pager.derived();

        assert!(derived.visible);
        assert_eq!(derived.allowed_page_sizes, vec![10, 20, 40]);
        assert_eq!(derived.page_size, PageSize::Fixed(20));
    }
}

mod callbacks {
    use super::*;

    #[rstest]
    fn on_page_index_change(mut pager: GridPager) {
        let event = pager.on_page_index_change(10);

        assert_eq!(pager.props.page_index, 10);
        assert_eq!(event, PagerEvent::PageIndexChanged(10));
    }

    #[rstest]
    fn on_page_size_change(mut pager: GridPager) {
        let event = pager.on_page_size_change(PageSize::Fixed(10));
        assert_eq!(pager.props.page_size, PageSize::Fixed(10));
        assert_eq!(event, PagerEvent::PageSizeChanged(PageSize::Fixed(10)));

        let event = pager.on_page_size_change(PageSize::Fixed(0));
        assert_eq!(pager.props.page_size, PageSize::All);
        assert_eq!(event, PagerEvent::PageSizeChanged(PageSize::All));
    }

    #[rstest]
    #[case(PagerEvent::PageIndexChanged(3))]
    #[case(PagerEvent::PageSizeChanged(PageSize::Fixed(50)))]
    #[case(PagerEvent::PageSizeChanged(PageSize::All))]
    fn owner_copy_matches_after_apply(mut pager: GridPager, #[case] input: PagerEvent) {
        let mut owner = pager.props.clone();

        let event = match input {
            PagerEvent::PageIndexChanged(idx) => pager.on_page_index_change(idx),
            PagerEvent::PageSizeChanged(size) => pager.on_page_size_change(size),
        };
        owner.apply(&event);

        assert_eq!(owner, pager.props);
    }

    #[rstest]
    fn apply_normalizes_zero_page_size(pager: GridPager) {
        let mut props = pager.props;

        props.apply(&PagerEvent::PageSizeChanged(PageSize::Fixed(0)));

        assert_eq!(props.page_size, PageSize::All);
    }
}

mod navigation {
    use super::*;

    #[rstest]
    fn next_page_moves_forward(mut paged_pager: GridPager) {
        assert_eq!(paged_pager.next_page(), Some(PagerEvent::PageIndexChanged(3)));
        assert_eq!(paged_pager.props.page_index, 3);
    }

    #[rstest]
    fn next_page_stops_at_last_page(mut paged_pager: GridPager) {
        paged_pager.props.page_index = 4;

        assert_eq!(paged_pager.next_page(), None);
        assert_eq!(paged_pager.props.page_index, 4);
    }

    #[rstest]
    fn prev_page_stops_at_first_page(mut paged_pager: GridPager) {
        paged_pager.props.page_index = 0;

        assert_eq!(paged_pager.prev_page(), None);
        assert_eq!(paged_pager.props.page_index, 0);
    }

    #[rstest]
    fn prev_page_clamps_out_of_range_index(mut paged_pager: GridPager) {
        paged_pager.props.page_index = 10;

        assert_eq!(paged_pager.prev_page(), Some(PagerEvent::PageIndexChanged(4)));
    }

    #[rstest]
    fn first_and_last_page(mut paged_pager: GridPager) {
        assert_eq!(paged_pager.last_page(), Some(PagerEvent::PageIndexChanged(4)));
        assert_eq!(paged_pager.last_page(), None);
        assert_eq!(paged_pager.first_page(), Some(PagerEvent::PageIndexChanged(0)));
        assert_eq!(paged_pager.first_page(), None);
    }
}
